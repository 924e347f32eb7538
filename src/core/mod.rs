//! Validation and parsing engine.
//!
//! # Modules
//!
//! - [`source`] - Raw environment sources ([`EnvSource`], [`ProcessEnv`], [`MapSource`])
//! - [`checker`] - The [`ConfigChecker`] that validates a source against a schema
//!
//! # Workflow
//!
//! 1. **Declare**: build a [`ConfigCollection`](crate::schema::ConfigCollection)
//! 2. **Validate**: construct a [`ConfigChecker`]; construction fails on a bad environment
//! 3. **Retrieve**: read typed values for the rest of the process lifetime
//! 4. **Refresh** (optional): re-validate after the source changed
//!
//! # Example
//!
//! ```rust,no_run
//! use envcheck::core::ConfigChecker;
//! use envcheck::domain::ValueType;
//! use envcheck::schema::ConfigCollection;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collection = ConfigCollection::new().include("DATABASE_URL", ValueType::Text)?;
//! let checker = ConfigChecker::new(&collection)?;
//! let url = checker.retrieve("DATABASE_URL")?.as_str().unwrap_or_default();
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod source;

pub use checker::ConfigChecker;
pub use source::{EnvSource, MapSource, ProcessEnv};
