//! CLI command implementations
//!
//! This module contains all CLI command implementations and the environment
//! loading they share.

pub mod init;
pub mod show;
pub mod validate;

use crate::config::load_schema;
use crate::core::{ConfigChecker, MapSource};
use crate::domain::{EnvCheckError, Result};
use crate::schema::ConfigCollection;

/// Exit code for a valid environment
pub const EXIT_OK: i32 = 0;
/// Exit code for schema or CLI configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit code for an environment that fails validation
pub const EXIT_INVALID_ENV: i32 = 3;

/// Builds the raw source the commands validate
///
/// The process environment always wins over values from `env_file`.
pub(crate) fn load_source(env_file: Option<&str>) -> Result<MapSource> {
    let source = MapSource::from_process_env();
    if let Some(path) = env_file {
        source.fill_missing(&MapSource::from_dotenv_file(path)?);
    }
    Ok(source)
}

/// Loads the schema and validates the environment against it
pub(crate) fn load_checker(
    schema_path: &str,
    env_file: Option<&str>,
) -> Result<(ConfigCollection, ConfigChecker)> {
    let collection = load_schema(schema_path)?;
    let source = load_source(env_file)?;
    let checker = ConfigChecker::with_source(&collection, source)?;
    Ok((collection, checker))
}

/// Maps a failure to the process exit code
pub(crate) fn exit_code_for(err: &EnvCheckError) -> i32 {
    if err.is_environment_error() {
        EXIT_INVALID_ENV
    } else {
        EXIT_CONFIG_ERROR
    }
}
