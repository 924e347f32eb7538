//! Schema file types
//!
//! This module defines the TOML structure of an envcheck schema file.

use crate::domain::ValueType;
use crate::schema::CollectionOptions;
use serde::{Deserialize, Serialize};

/// Root of a schema file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    /// Schema-wide options
    #[serde(default)]
    pub options: CollectionOptions,

    /// Declared variables, in order
    #[serde(default)]
    pub entries: Vec<SchemaEntry>,
}

/// One declared variable
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaEntry {
    /// Variable name
    pub name: String,

    /// Value type (text, number, boolean, list, enum)
    #[serde(rename = "type")]
    pub value_type: ValueType,

    /// Explicit required flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Value used when the variable is missing; makes the entry optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<toml::Value>,

    /// Allowed values of an enum entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,

    /// Free-form description, shown by the CLI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Sample schema written by `envcheck init`
pub const SAMPLE_SCHEMA: &str = r#"# envcheck schema
#
# Each [[entries]] block declares one environment variable.
# type: text | number | boolean | list | enum
# An entry is required unless it has a fallback or `required = false`.

[options]
ensure_upper_case_names = true

[[entries]]
name = "DATABASE_URL"
type = "text"
description = "Connection string of the primary database"

[[entries]]
name = "PORT"
type = "number"
fallback = 8080

[[entries]]
name = "DEBUG"
type = "boolean"
required = false

[[entries]]
name = "ALLOWED_ORIGINS"
type = "list"
fallback = ["http://localhost:3000"]

[[entries]]
name = "LOG_FORMAT"
type = "enum"
items = ["json", "text"]
fallback = "text"
"#;
