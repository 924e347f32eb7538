//! Show command implementation
//!
//! This module implements the `show` command, which validates the environment
//! and prints the resolved, typed values.

use super::{exit_code_for, load_checker, EXIT_OK};
use crate::core::ConfigChecker;
use crate::domain::ConfigValue;
use crate::schema::ConfigCollection;
use clap::{Args, ValueEnum};
use serde_json::{Map, Value};

const MASK: &str = "********";
const SENSITIVE_MARKERS: [&str; 4] = ["SECRET", "PASSWORD", "TOKEN", "KEY"];

/// Output format of the show command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print values of sensitive variables instead of masking them
    #[arg(long)]
    pub reveal: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, schema_path: &str, env_file: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(schema_path = %schema_path, "Showing environment");

        let (collection, checker) = match load_checker(schema_path, env_file) {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::error!(error = %e, "Validation failed");
                eprintln!("Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&self.render_json(&checker))?)
            }
            OutputFormat::Table => print!("{}", self.render_table(&collection, &checker)),
        }
        Ok(EXIT_OK)
    }

    fn render_json(&self, checker: &ConfigChecker) -> Value {
        let map: Map<String, Value> = checker
            .retrieve_all()
            .iter()
            .map(|(name, value)| {
                let rendered = if self.masks(name) {
                    Value::String(MASK.to_string())
                } else {
                    json_value(value)
                };
                (name.clone(), rendered)
            })
            .collect();
        Value::Object(map)
    }

    fn render_table(&self, collection: &ConfigCollection, checker: &ConfigChecker) -> String {
        let width = collection
            .configs()
            .iter()
            .map(|config| config.name().len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for config in collection.configs() {
            let shown = match checker.retrieve(config.name()) {
                Ok(_) if self.masks(config.name()) => MASK.to_string(),
                Ok(ConfigValue::List(items)) => format!("{items:?}"),
                Ok(value) => value.to_string(),
                Err(_) => String::new(),
            };
            out.push_str(&format!(
                "{:<width$}  {:<7}  {}\n",
                config.name(),
                config.value_type().as_str(),
                shown,
            ));
        }
        out
    }

    fn masks(&self, name: &str) -> bool {
        !self.reveal && is_sensitive(name)
    }
}

/// Whether a variable name looks like it holds a credential
///
/// Markers match whole `_`-separated segments, so `API_KEY` is sensitive
/// while `MONKEY` is not.
pub(crate) fn is_sensitive(name: &str) -> bool {
    name.split('_').any(|segment| {
        SENSITIVE_MARKERS
            .iter()
            .any(|marker| segment.eq_ignore_ascii_case(marker))
    })
}

/// Integral numbers are written as JSON integers
fn json_value(value: &ConfigValue) -> Value {
    match value.as_integer() {
        Some(n) => Value::from(n),
        None => serde_json::to_value(value).unwrap_or(Value::Null),
    }
}
