//! Domain error types
//!
//! This module defines the error hierarchy for envcheck. Schema declaration
//! failures live in [`SchemaError`]; everything the checker can raise at
//! validation or retrieval time is a variant of [`EnvCheckError`].
//! The display strings are part of the public contract and must not change.

use super::value::ValueType;
use thiserror::Error;

/// Errors raised while declaring a schema
///
/// These are construction-time failures and can only be fixed at the call site
/// (or in the schema file) that declared the entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Name is empty after trimming
    #[error("the config must have a non-empty name")]
    EmptyName,

    /// Name is not upper-case while upper-case names are enforced
    #[error("the config \"{name}\" must have an uppercased name")]
    NotUpperCase { name: String },

    /// `items` given for a type other than enum
    #[error("parameter \"option.items\" on config \"{name}\" is only allowed when type is \"enum\"")]
    ItemsNotAllowed { name: String },

    /// Fallback does not have the representation of the declared type
    #[error("fallback of config \"{name}\" with type \"{value_type}\" must be {expected}")]
    FallbackMismatch {
        name: String,
        value_type: ValueType,
        expected: &'static str,
    },
}

/// Main envcheck error type
#[derive(Debug, Error)]
pub enum EnvCheckError {
    /// Invalid schema declaration
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Required variables absent (or empty) in the source, in declaration order
    #[error("missing environment variables: {}", quote_list(.names))]
    MissingRequired { names: Vec<String> },

    /// A present value could not be coerced to its declared type
    #[error("environment variable {name} is not of type {value_type}")]
    TypeMismatch { name: String, value_type: ValueType },

    /// `declare` on a name that already has a value
    #[error("environment variable \"{name}\" already declared")]
    AlreadyDeclared { name: String },

    /// `retrieve` on a name with no value
    #[error("unknown environment variable \"{name}\"")]
    UnknownVariable { name: String },

    /// Schema file or CLI configuration problems
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl EnvCheckError {
    /// Whether the error comes from validating the environment against a schema,
    /// as opposed to the schema itself being invalid
    pub fn is_environment_error(&self) -> bool {
        matches!(
            self,
            EnvCheckError::MissingRequired { .. } | EnvCheckError::TypeMismatch { .. }
        )
    }
}

fn quote_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<std::io::Error> for EnvCheckError {
    fn from(err: std::io::Error) -> Self {
        EnvCheckError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for EnvCheckError {
    fn from(err: toml::de::Error) -> Self {
        EnvCheckError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<dotenvy::Error> for EnvCheckError {
    fn from(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(io) => EnvCheckError::Io(io.to_string()),
            other => EnvCheckError::Configuration(format!("dotenv parse error: {other}")),
        }
    }
}
