//! Schema file loader
//!
//! Reads a TOML schema file and declares every entry through
//! [`ConfigCollection::include_with`], so files obey the same rules as code.

use super::schema::{SchemaEntry, SchemaFile};
use crate::domain::errors::EnvCheckError;
use crate::domain::result::Result;
use crate::domain::ConfigValue;
use crate::schema::{ConfigCollection, ConfigOptions};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loads a schema from a TOML file
///
/// # Errors
///
/// Returns an error if:
/// - the file does not exist or cannot be read
/// - TOML parsing fails
/// - an entry breaks a declaration rule
///
/// # Examples
///
/// ```no_run
/// use envcheck::config::load_schema;
///
/// let collection = load_schema("envcheck.toml").expect("Failed to load schema");
/// ```
pub fn load_schema(path: impl AsRef<Path>) -> Result<ConfigCollection> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(EnvCheckError::Configuration(format!(
            "Schema file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        EnvCheckError::Configuration(format!(
            "Failed to read schema file {}: {}",
            path.display(),
            e
        ))
    })?;

    let collection = parse_schema(&contents)?;
    debug!(path = %path.display(), entries = collection.len(), "Loaded schema file");
    Ok(collection)
}

/// Parses a schema from TOML text
///
/// # Errors
///
/// Returns an error if TOML parsing fails or an entry breaks a declaration rule.
pub fn parse_schema(contents: &str) -> Result<ConfigCollection> {
    let file: SchemaFile = toml::from_str(contents)?;
    build_collection(file)
}

/// Declares every entry of a parsed schema file, in order
///
/// # Errors
///
/// Returns the first declaration error.
pub fn build_collection(file: SchemaFile) -> Result<ConfigCollection> {
    let collection = file
        .entries
        .into_iter()
        .try_fold(ConfigCollection::with_options(file.options), |collection, entry| {
            collection.include_with(&entry.name, entry.value_type, entry_options(&entry))
        })?;
    Ok(collection)
}

fn entry_options(entry: &SchemaEntry) -> ConfigOptions {
    let mut options = ConfigOptions::new();
    if let Some(required) = entry.required {
        options = options.required(required);
    }
    if let Some(items) = &entry.items {
        options = options.items(items.iter().cloned());
    }
    if let Some(fallback) = &entry.fallback {
        options = match fallback_value(fallback) {
            Some(value) => options.fallback(value),
            None => options.unrepresentable_fallback(fallback.is_array()),
        };
    }
    options
}

/// Converts a TOML literal into a fallback value
///
/// Returns `None` for datetimes, tables and arrays holding anything other
/// than strings; the declaration then reports them against the entry's type.
fn fallback_value(value: &toml::Value) -> Option<ConfigValue> {
    match value {
        toml::Value::String(s) => Some(ConfigValue::Text(s.clone())),
        toml::Value::Integer(i) => Some(ConfigValue::Number(*i as f64)),
        toml::Value::Float(f) => Some(ConfigValue::Number(*f)),
        toml::Value::Boolean(b) => Some(ConfigValue::Boolean(*b)),
        toml::Value::Array(values) => values
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(ConfigValue::List),
        toml::Value::Datetime(_) | toml::Value::Table(_) => None,
    }
}
