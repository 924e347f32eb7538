//! Value types and typed configuration values
//!
//! Every environment variable arrives as a string. This module defines the closed
//! set of kinds a variable can be declared as ([`ValueType`]), the typed value a
//! string is coerced into ([`ConfigValue`]), and the per-type rules for defaults,
//! coercion and fallback checking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Typed snapshot of resolved configuration values, keyed by variable name
pub type ConfigValueMap = BTreeMap<String, ConfigValue>;

const TRUTHY: [&str; 3] = ["true", "yes", "1"];
const FALSY: [&str; 3] = ["false", "no", "0"];

/// Data types an environment variable can be declared as
///
/// # Examples
///
/// ```
/// use envcheck::domain::value::{ConfigValue, ValueType};
///
/// assert_eq!(ValueType::Boolean.coerce("YES", &[]), Some(ConfigValue::Boolean(true)));
/// assert_eq!(ValueType::Number.coerce("abc", &[]), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// The raw string, as is
    Text,
    /// A number parsed from the whole string
    Number,
    /// `true`/`yes`/`1` or `false`/`no`/`0`, case-insensitive
    Boolean,
    /// A comma delimited list of strings
    List,
    /// One of a declared set of strings
    Enum,
}

impl ValueType {
    /// All value types, in declaration order
    pub const ALL: [ValueType; 5] = [
        ValueType::Text,
        ValueType::Number,
        ValueType::Boolean,
        ValueType::List,
        ValueType::Enum,
    ];

    /// Returns the lowercase name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::List => "list",
            ValueType::Enum => "enum",
        }
    }

    /// Value used for an optional variable declared without a fallback
    pub fn default_value(&self) -> ConfigValue {
        match self {
            ValueType::Text | ValueType::Enum => ConfigValue::Text(String::new()),
            ValueType::Number => ConfigValue::Number(0.0),
            ValueType::Boolean => ConfigValue::Boolean(false),
            ValueType::List => ConfigValue::List(Vec::new()),
        }
    }

    /// Coerces a raw string into a typed value
    ///
    /// Returns `None` when the string is not a valid value of this type.
    /// `items` is only consulted for [`ValueType::Enum`].
    pub fn coerce(&self, raw: &str, items: &[String]) -> Option<ConfigValue> {
        match self {
            ValueType::Text => Some(ConfigValue::Text(raw.to_string())),
            ValueType::Number => parse_number(raw).map(ConfigValue::Number),
            ValueType::Boolean => parse_boolean(raw).map(ConfigValue::Boolean),
            ValueType::List => Some(ConfigValue::List(
                raw.split(',').map(str::to_string).collect(),
            )),
            ValueType::Enum => items
                .iter()
                .any(|item| item == raw)
                .then(|| ConfigValue::Text(raw.to_string())),
        }
    }

    /// Checks that a fallback has the representation this type produces
    pub fn accepts(&self, value: &ConfigValue) -> bool {
        matches!(
            (self, value),
            (ValueType::Text | ValueType::Enum, ConfigValue::Text(_))
                | (ValueType::Number, ConfigValue::Number(_))
                | (ValueType::Boolean, ConfigValue::Boolean(_))
                | (ValueType::List, ConfigValue::List(_))
        )
    }

    /// Human description of the fallback representation, as used in errors
    pub fn fallback_shape(&self) -> &'static str {
        match self {
            ValueType::Text | ValueType::Enum => "a string",
            ValueType::Number => "a number",
            ValueType::Boolean => "a boolean",
            ValueType::List => "an array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "string" => Ok(ValueType::Text),
            "number" => Ok(ValueType::Number),
            "boolean" | "bool" => Ok(ValueType::Boolean),
            "list" => Ok(ValueType::List),
            "enum" => Ok(ValueType::Enum),
            _ => Err(format!("Unknown value type: {s}")),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_boolean(raw: &str) -> Option<bool> {
    let lowered = raw.to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// A typed configuration value
///
/// Serializes untagged, so a snapshot renders as plain JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl ConfigValue {
    /// Returns the string for text and enum values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as an integer when it has no fractional part
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Number(n)
                if n.is_finite()
                    && n.fract() == 0.0
                    && *n >= i64::MIN as f64
                    && *n <= i64::MAX as f64 =>
            {
                Some(*n as i64)
            }
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(s) => f.write_str(s),
            ConfigValue::Number(n) => write!(f, "{n}"),
            ConfigValue::Boolean(b) => write!(f, "{b}"),
            ConfigValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Number(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Number(f64::from(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Number(value as f64)
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        ConfigValue::Number(f64::from(value))
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::Number(f64::from(value))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        ConfigValue::List(value)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(value: Vec<&str>) -> Self {
        ConfigValue::List(value.into_iter().map(str::to_string).collect())
    }
}
