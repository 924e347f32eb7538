//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for envcheck using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// envcheck - typed validation of environment variables
#[derive(Parser, Debug)]
#[command(name = "envcheck")]
#[command(version, about, long_about = None)]
#[command(author = "Envcheck Contributors")]
pub struct Cli {
    /// Path to the schema file
    #[arg(short, long, default_value = "envcheck.toml", env = "ENVCHECK_SCHEMA")]
    pub schema: String,

    /// .env file whose values fill in variables missing from the environment
    #[arg(short, long)]
    pub env_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ENVCHECK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the environment against the schema
    Validate(commands::validate::ValidateArgs),

    /// Validate, then print the resolved values
    Show(commands::show::ShowArgs),

    /// Create a sample schema file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Execute the selected command and return the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        let env_file = self.env_file.as_deref();
        match &self.command {
            Commands::Validate(args) => args.execute(&self.schema, env_file),
            Commands::Show(args) => args.execute(&self.schema, env_file),
            Commands::Init(args) => args.execute(),
        }
    }
}
