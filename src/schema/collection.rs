//! Schema builder
//!
//! [`ConfigCollection`] accumulates config declarations in order, checking every
//! declaration invariant as it goes. A declaration that breaks one fails
//! immediately, so a schema that was built is always consistent.

use super::descriptor::{ConfigDescriptor, ConfigOptions, Fallback};
use crate::domain::{SchemaError, ValueType};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Schema-wide options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionOptions {
    /// Reject names that are not already upper-case
    pub ensure_upper_case_names: bool,
}

/// Ordered list of config declarations
///
/// # Examples
///
/// ```
/// use envcheck::domain::ValueType;
/// use envcheck::schema::{ConfigCollection, ConfigOptions};
///
/// # fn example() -> Result<(), envcheck::domain::SchemaError> {
/// let collection = ConfigCollection::new()
///     .include("DATABASE_URL", ValueType::Text)?
///     .include_with("PORT", ValueType::Number, ConfigOptions::new().fallback(8080))?
///     .include_with(
///         "LOG_FORMAT",
///         ValueType::Enum,
///         ConfigOptions::new().items(["json", "text"]).fallback("text"),
///     )?;
///
/// assert_eq!(collection.configs().len(), 3);
/// assert!(!collection.configs()[1].is_required());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigCollection {
    options: CollectionOptions,
    configs: Vec<ConfigDescriptor>,
}

impl ConfigCollection {
    /// Creates an empty collection with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CollectionOptions) -> Self {
        Self {
            options,
            configs: Vec::new(),
        }
    }

    pub fn options(&self) -> CollectionOptions {
        self.options
    }

    /// Declares a required config with no options
    pub fn include(self, name: &str, value_type: ValueType) -> Result<Self, SchemaError> {
        self.include_with(name, value_type, ConfigOptions::default())
    }

    /// Declares a config
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the name is empty after trimming
    /// - upper-case names are enforced and the name is not upper-case
    /// - `items` is given for a type other than [`ValueType::Enum`]
    /// - the fallback does not match the declared type
    pub fn include_with(
        mut self,
        name: &str,
        value_type: ValueType,
        options: ConfigOptions,
    ) -> Result<Self, SchemaError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SchemaError::EmptyName);
        }

        if self.options.ensure_upper_case_names && name != name.to_uppercase() {
            return Err(SchemaError::NotUpperCase {
                name: name.to_string(),
            });
        }

        let ConfigOptions {
            required,
            fallback,
            items,
        } = options;

        if value_type != ValueType::Enum && items.is_some() {
            return Err(SchemaError::ItemsNotAllowed {
                name: name.to_string(),
            });
        }

        let mismatch = |expected: &'static str| SchemaError::FallbackMismatch {
            name: name.to_string(),
            value_type,
            expected,
        };

        let (required, fallback) = match fallback {
            Some(Fallback::Unrepresentable { array }) => {
                return Err(match value_type {
                    ValueType::List if array => mismatch("an array of strings"),
                    _ => mismatch(value_type.fallback_shape()),
                });
            }
            Some(Fallback::Value(fallback)) => {
                if !value_type.accepts(&fallback) {
                    return Err(mismatch(value_type.fallback_shape()));
                }
                if required == Some(true) {
                    warn!(
                        config = name,
                        "Config declared required with a fallback, treating it as optional"
                    );
                }
                (false, fallback)
            }
            None => (required.unwrap_or(true), value_type.default_value()),
        };

        debug!(
            config = name,
            value_type = %value_type,
            required,
            "Declared config"
        );

        self.configs.push(ConfigDescriptor::new(
            name.to_string(),
            value_type,
            required,
            fallback,
            items.unwrap_or_default(),
        ));

        Ok(self)
    }

    /// Returns the declared configs, in declaration order
    pub fn configs(&self) -> &[ConfigDescriptor] {
        &self.configs
    }

    pub fn into_configs(self) -> Vec<ConfigDescriptor> {
        self.configs
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
