//! Config descriptors and declaration options

use crate::domain::{ConfigValue, ValueType};

/// Options accepted when declaring a config
///
/// Follows the builder pattern; every setter is optional.
///
/// # Examples
///
/// ```
/// use envcheck::schema::ConfigOptions;
///
/// let options = ConfigOptions::new().fallback(8080);
/// let level = ConfigOptions::new().items(["debug", "info"]).required(false);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOptions {
    pub(crate) required: Option<bool>,
    pub(crate) fallback: Option<Fallback>,
    pub(crate) items: Option<Vec<String>>,
}

/// Fallback as given at declaration time
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Fallback {
    Value(ConfigValue),
    /// Schema-file literal with no [`ConfigValue`] counterpart; `array` is set
    /// for arrays holding non-string elements
    Unrepresentable { array: bool },
}

impl ConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the config as required or optional
    ///
    /// Ignored when a fallback is also given: a fallback always makes the
    /// config optional.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Sets the value used when the variable is missing
    pub fn fallback(mut self, fallback: impl Into<ConfigValue>) -> Self {
        self.fallback = Some(Fallback::Value(fallback.into()));
        self
    }

    /// Records a fallback literal that cannot be stored, so the declaration
    /// reports it after the name and items checks
    pub(crate) fn unrepresentable_fallback(mut self, array: bool) -> Self {
        self.fallback = Some(Fallback::Unrepresentable { array });
        self
    }

    /// Sets the allowed values of an enum config
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = Some(items.into_iter().map(Into::into).collect());
        self
    }
}

/// Immutable description of one declared config
///
/// Created by [`ConfigCollection`](super::ConfigCollection), read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDescriptor {
    name: String,
    value_type: ValueType,
    required: bool,
    fallback: ConfigValue,
    items: Vec<String>,
}

impl ConfigDescriptor {
    pub(crate) fn new(
        name: String,
        value_type: ValueType,
        required: bool,
        fallback: ConfigValue,
        items: Vec<String>,
    ) -> Self {
        Self {
            name,
            value_type,
            required,
            fallback,
            items,
        }
    }

    /// Trimmed variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Value stored when the variable is missing and the config is optional
    pub fn fallback(&self) -> &ConfigValue {
        &self.fallback
    }

    /// Allowed values; empty unless the type is enum
    pub fn items(&self) -> &[String] {
        &self.items
    }
}
