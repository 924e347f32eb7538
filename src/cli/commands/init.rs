//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! schema file.

use crate::config::SAMPLE_SCHEMA;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the schema file
    #[arg(short, long, default_value = "envcheck.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing schema file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Schema file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, SAMPLE_SCHEMA) {
            Ok(_) => {
                println!("✅ Schema file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} to declare your variables", self.output);
                println!("  2. Check the environment: envcheck -s {} validate", self.output);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write schema file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}
