//! Environment validation and typed retrieval
//!
//! [`ConfigChecker`] reads every declared config from an [`EnvSource`], applies
//! the presence and defaulting rules, coerces the raw strings and keeps the
//! result as an immutable snapshot.
//!
//! Missing required variables are collected and reported together, so a
//! misconfigured deployment sees everything that is missing at once. A value
//! that is present but cannot be coerced stops the pass immediately.

use super::source::{EnvSource, ProcessEnv};
use crate::domain::{ConfigValue, ConfigValueMap, EnvCheckError, Result};
use crate::schema::{ConfigCollection, ConfigDescriptor};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Validated, typed view of the environment
///
/// # Examples
///
/// ```
/// use envcheck::core::{source::MapSource, ConfigChecker};
/// use envcheck::domain::{ConfigValue, ValueType};
/// use envcheck::schema::{ConfigCollection, ConfigOptions};
///
/// # fn example() -> envcheck::domain::Result<()> {
/// let collection = ConfigCollection::new()
///     .include("PORT", ValueType::Number)?
///     .include_with("DEBUG", ValueType::Boolean, ConfigOptions::new().required(false))?;
///
/// let source = MapSource::from_iter([("PORT", "8080")]);
/// let checker = ConfigChecker::with_source(&collection, source)?;
///
/// assert_eq!(checker.retrieve("PORT")?.as_integer(), Some(8080));
/// assert_eq!(checker.retrieve("DEBUG")?, &ConfigValue::Boolean(false));
/// # Ok(())
/// # }
/// ```
pub struct ConfigChecker {
    configs: Vec<ConfigDescriptor>,
    source: Arc<dyn EnvSource>,
    values: ConfigValueMap,
}

impl ConfigChecker {
    /// Validates the process environment against `collection`
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot be
    /// coerced to its declared type.
    pub fn new(collection: &ConfigCollection) -> Result<Self> {
        Self::with_source(collection, ProcessEnv)
    }

    /// Validates `source` against `collection`
    ///
    /// # Errors
    ///
    /// Same as [`ConfigChecker::new`].
    pub fn with_source(
        collection: &ConfigCollection,
        source: impl EnvSource + 'static,
    ) -> Result<Self> {
        Self::with_shared_source(collection, Arc::new(source))
    }

    /// Validates a source that is shared with other checkers
    ///
    /// # Errors
    ///
    /// Same as [`ConfigChecker::new`].
    pub fn with_shared_source(
        collection: &ConfigCollection,
        source: Arc<dyn EnvSource>,
    ) -> Result<Self> {
        let mut checker = Self {
            configs: collection.configs().to_vec(),
            source,
            values: ConfigValueMap::new(),
        };
        checker.refresh()?;
        Ok(checker)
    }

    /// Checker with no schema over the process environment
    ///
    /// Starts with an empty snapshot; values can still be added with
    /// [`declare`](Self::declare) or [`merge_configs`](Self::merge_configs).
    pub fn empty() -> Self {
        Self {
            configs: Vec::new(),
            source: Arc::new(ProcessEnv),
            values: ConfigValueMap::new(),
        }
    }

    /// Re-reads the source and replaces the snapshot
    ///
    /// The previous snapshot is kept when validation fails.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigChecker::new`].
    pub fn refresh(&mut self) -> Result<&mut Self> {
        self.values = self.fetch()?;
        info!(count = self.values.len(), "Environment validated");
        Ok(self)
    }

    /// Adds a value that is not part of the schema
    ///
    /// No type check is done on `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvCheckError::AlreadyDeclared`] if `name` already has a value
    /// in the snapshot or is present in the source.
    pub fn declare(&mut self, name: &str, value: impl Into<ConfigValue>) -> Result<&mut Self> {
        if self.values.contains_key(name) || self.source.contains(name) {
            return Err(EnvCheckError::AlreadyDeclared {
                name: name.to_string(),
            });
        }

        debug!(config = name, "Declared value outside the schema");
        self.values.insert(name.to_string(), value.into());
        Ok(self)
    }

    /// Returns the value of `name`
    ///
    /// # Errors
    ///
    /// Returns [`EnvCheckError::UnknownVariable`] if `name` has no value.
    pub fn retrieve(&self, name: &str) -> Result<&ConfigValue> {
        self.values
            .get(name)
            .ok_or_else(|| EnvCheckError::UnknownVariable {
                name: name.to_string(),
            })
    }

    /// Returns the whole snapshot
    pub fn retrieve_all(&self) -> &ConfigValueMap {
        &self.values
    }

    /// Copies every value of `other` into this snapshot
    ///
    /// Values from `other` win on conflicting names. `other` is left untouched.
    pub fn merge_configs(&mut self, other: &ConfigChecker) -> &mut Self {
        debug!(count = other.values.len(), "Merging configs");
        self.values
            .extend(other.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Declared configs, in declaration order
    pub fn configs(&self) -> &[ConfigDescriptor] {
        &self.configs
    }

    fn fetch(&self) -> Result<ConfigValueMap> {
        let mut values = ConfigValueMap::new();
        let mut missing = Vec::new();

        for config in &self.configs {
            let raw = self
                .source
                .get(config.name())
                .filter(|value| !value.is_empty());

            let Some(raw) = raw else {
                if config.is_required() {
                    missing.push(config.name().to_string());
                } else {
                    debug!(config = config.name(), "Using fallback");
                    values.insert(config.name().to_string(), config.fallback().clone());
                }
                continue;
            };

            let value = config
                .value_type()
                .coerce(&raw, config.items())
                .ok_or_else(|| EnvCheckError::TypeMismatch {
                    name: config.name().to_string(),
                    value_type: config.value_type(),
                })?;

            debug!(
                config = config.name(),
                value_type = %config.value_type(),
                "Resolved config"
            );
            values.insert(config.name().to_string(), value);
        }

        if !missing.is_empty() {
            return Err(EnvCheckError::MissingRequired { names: missing });
        }

        Ok(values)
    }
}

impl Default for ConfigChecker {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for ConfigChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigChecker")
            .field("configs", &self.configs)
            .field("values", &self.values.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
