//! Schema declaration
//!
//! A schema is an ordered list of [`ConfigDescriptor`]s built with
//! [`ConfigCollection`]. Declaration rules are enforced when each config is
//! included, never later at validation time.

pub mod collection;
pub mod descriptor;

pub use collection::{CollectionOptions, ConfigCollection};
pub use descriptor::{ConfigDescriptor, ConfigOptions};
