//! Domain types for envcheck.
//!
//! The domain layer provides:
//! - **Value types** ([`ValueType`]) and typed values ([`ConfigValue`])
//! - **Error types** ([`EnvCheckError`], [`SchemaError`])
//! - **Result type alias** ([`Result`])
//!
//! # Coercion
//!
//! ```rust
//! use envcheck::domain::{ConfigValue, ValueType};
//!
//! let hosts = ValueType::List.coerce("a,b", &[]);
//! assert_eq!(hosts, Some(ConfigValue::from(vec!["a", "b"])));
//! ```

pub mod errors;
pub mod result;
pub mod value;

pub use errors::{EnvCheckError, SchemaError};
pub use result::Result;
pub use value::{ConfigValue, ConfigValueMap, ValueType};
