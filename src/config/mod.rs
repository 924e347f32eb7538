//! Schema files for envcheck.
//!
//! Schemas can be declared in code with [`ConfigCollection`](crate::schema::ConfigCollection)
//! or in a TOML file loaded by this module.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envcheck::config::load_schema;
//! use envcheck::core::ConfigChecker;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collection = load_schema("envcheck.toml")?;
//! let checker = ConfigChecker::new(&collection)?;
//! println!("PORT = {}", checker.retrieve("PORT")?);
//! # Ok(())
//! # }
//! ```
//!
//! # File Structure
//!
//! ```toml
//! [options]
//! ensure_upper_case_names = true
//!
//! [[entries]]
//! name = "PORT"
//! type = "number"
//! fallback = 8080
//!
//! [[entries]]
//! name = "LOG_FORMAT"
//! type = "enum"
//! items = ["json", "text"]
//! required = false
//! ```
//!
//! Fallbacks are TOML literals: strings for text and enum entries, integers or
//! floats for numbers, booleans, and arrays of strings for lists.

pub mod loader;
pub mod schema;

pub use loader::{build_collection, load_schema, parse_schema};
pub use schema::{SchemaEntry, SchemaFile, SAMPLE_SCHEMA};
