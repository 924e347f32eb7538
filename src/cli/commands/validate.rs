//! Validate command implementation
//!
//! This module implements the `validate` command, which checks the current
//! environment against a schema file.

use super::{exit_code_for, load_checker, EXIT_OK};
use clap::Args;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, schema_path: &str, env_file: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(schema_path = %schema_path, "Validating environment");

        let (collection, checker) = match load_checker(schema_path, env_file) {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::error!(error = %e, "Validation failed");
                println!("❌ Environment validation failed");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if self.quiet {
            return Ok(EXIT_OK);
        }

        let optional = collection
            .configs()
            .iter()
            .filter(|config| !config.is_required())
            .count();

        println!("✅ Environment is valid");
        println!();
        println!("Summary:");
        println!("  Schema: {schema_path}");
        if let Some(env_file) = env_file {
            println!("  Env file: {env_file}");
        }
        println!("  Declared: {}", collection.len());
        println!("  Required: {}", collection.len() - optional);
        println!("  Optional: {optional}");
        println!("  Resolved: {}", checker.retrieve_all().len());
        println!();
        Ok(EXIT_OK)
    }
}
