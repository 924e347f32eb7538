// envcheck - Typed validation of environment variables
// Copyright (c) 2026 Envcheck Contributors
// Licensed under the MIT License

use clap::Parser;
use envcheck::cli::Cli;
use envcheck::logging::init_logging;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("warn");
    if let Err(e) = init_logging(log_level, cli.json_logs) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "envcheck starting");

    let exit_code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}
