// envcheck - Typed validation of environment variables
// Copyright (c) 2026 Envcheck Contributors
// Licensed under the MIT License

//! # envcheck - typed environment configuration
//!
//! Every value read from a process environment is a string. envcheck lets an
//! application declare, once, which variables it needs and what type each one
//! has, then validates the environment at startup and hands back typed values.
//!
//! ## Architecture
//!
//! - [`domain`] - Value types, typed values and errors
//! - [`schema`] - Schema declaration ([`schema::ConfigCollection`])
//! - [`core`] - Validation engine ([`core::ConfigChecker`]) and raw sources
//! - [`config`] - TOML schema files
//! - [`logging`] - Structured logging setup
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust
//! use envcheck::core::{ConfigChecker, MapSource};
//! use envcheck::domain::ValueType;
//! use envcheck::schema::{ConfigCollection, ConfigOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let collection = ConfigCollection::new()
//!     .include("DATABASE_URL", ValueType::Text)?
//!     .include_with("PORT", ValueType::Number, ConfigOptions::new().fallback(8080))?
//!     .include_with(
//!         "LOG_FORMAT",
//!         ValueType::Enum,
//!         ConfigOptions::new().items(["json", "text"]).fallback("text"),
//!     )?;
//!
//! // ConfigChecker::new(&collection) reads the real process environment.
//! let source = MapSource::from_iter([("DATABASE_URL", "postgres://localhost/app")]);
//! let config = ConfigChecker::with_source(&collection, source)?;
//!
//! assert_eq!(config.retrieve("PORT")?.as_integer(), Some(8080));
//! assert_eq!(config.retrieve("LOG_FORMAT")?.as_str(), Some("text"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Missing required variables are reported together; a value of the wrong type
//! fails straight away:
//!
//! ```rust
//! use envcheck::core::{ConfigChecker, MapSource};
//! use envcheck::domain::ValueType;
//! use envcheck::schema::ConfigCollection;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let collection = ConfigCollection::new()
//!     .include("HOST", ValueType::Text)?
//!     .include("PORT", ValueType::Number)?;
//!
//! let err = ConfigChecker::with_source(&collection, MapSource::new()).unwrap_err();
//! assert_eq!(err.to_string(), r#"missing environment variables: "HOST", "PORT""#);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod schema;
