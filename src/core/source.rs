//! Raw environment sources
//!
//! The checker never reads `std::env` directly; it reads through an
//! [`EnvSource`]. [`ProcessEnv`] is the real process environment, [`MapSource`]
//! is an isolated table for tests, `.env` files and composed environments.

use crate::domain::Result;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Flat string key/value table that configuration is read from
///
/// Implementations are read-only from the checker's point of view.
pub trait EnvSource: Send + Sync {
    /// Returns the raw value for `key`, if the key is present
    fn get(&self, key: &str) -> Option<String>;

    /// Whether `key` is present, even with an empty value
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// The operating-system process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Keys containing '=' or NUL make std::env panic on some platforms.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// In-memory environment table
///
/// Clones share the same table, so a test can keep a handle, hand a clone to a
/// checker and change values before calling `refresh`.
///
/// # Examples
///
/// ```
/// use envcheck::core::source::{EnvSource, MapSource};
///
/// let source = MapSource::from_iter([("PORT", "8080")]);
/// let handle = source.clone();
/// handle.set("PORT", "9090");
/// assert_eq!(source.get("PORT").as_deref(), Some("9090"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    vars: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the current process environment
    ///
    /// Variables whose name or value is not valid Unicode are read lossily.
    pub fn from_process_env() -> Self {
        Self::from_iter(std::env::vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    }

    /// Reads a `.env` file without touching the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line cannot be parsed.
    pub fn from_dotenv_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = Self::new();
        {
            let mut vars = source.write();
            for item in dotenvy::from_path_iter(path)? {
                let (key, value) = item?;
                vars.insert(key, value);
            }
        }
        debug!(path = %path.display(), count = source.len(), "Loaded dotenv file");
        Ok(source)
    }

    /// Sets a variable
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.write().insert(key.into(), value.into());
    }

    /// Removes a variable, returning its previous value
    pub fn remove(&self, key: &str) -> Option<String> {
        self.write().remove(key)
    }

    /// Copies every variable of `other` that is not already present here
    pub fn fill_missing(&self, other: &MapSource) {
        // Snapshot first: `other` may share this table.
        let incoming = other.to_map();
        let mut vars = self.write();
        for (key, value) in incoming {
            vars.entry(key).or_insert(value);
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns a copy of the table
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.vars.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.vars.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }
}

impl EnvSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_map_source_lookup() {
        let source = MapSource::from_iter([("A", "1"), ("EMPTY", "")]);
        assert_eq!(source.get("A").as_deref(), Some("1"));
        assert_eq!(source.get("B"), None);
        assert!(source.contains("EMPTY"));
        assert!(!source.contains("B"));
    }

    #[test]
    fn test_clones_share_the_table() {
        let source = MapSource::new();
        let handle = source.clone();
        handle.set("KEY", "value");
        assert_eq!(source.get("KEY").as_deref(), Some("value"));
        assert_eq!(handle.remove("KEY").as_deref(), Some("value"));
        assert!(source.is_empty());
    }

    #[test]
    fn test_fill_missing_keeps_existing_values() {
        let base = MapSource::from_iter([("A", "from-env")]);
        let file = MapSource::from_iter([("A", "from-file"), ("B", "from-file")]);

        base.fill_missing(&file);

        assert_eq!(base.get("A").as_deref(), Some("from-env"));
        assert_eq!(base.get("B").as_deref(), Some("from-file"));
        assert_eq!(file.len(), 2);
    }

    #[test]
    fn test_fill_missing_with_itself() {
        let source = MapSource::from_iter([("A", "1")]);
        source.fill_missing(&source.clone());
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_from_dotenv_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "PORT=8080").unwrap();
        writeln!(file, "GREETING=\"hello world\"").unwrap();
        file.flush().unwrap();

        let source = MapSource::from_dotenv_file(file.path()).unwrap();
        assert_eq!(source.get("PORT").as_deref(), Some("8080"));
        assert_eq!(source.get("GREETING").as_deref(), Some("hello world"));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_from_missing_dotenv_file() {
        let result = MapSource::from_dotenv_file("/nonexistent/.env");
        assert!(result.is_err());
    }

    #[test]
    fn test_process_env_ignores_invalid_keys() {
        assert_eq!(ProcessEnv.get(""), None);
        assert_eq!(ProcessEnv.get("A=B"), None);
        assert!(!ProcessEnv.contains("ENVCHECK_SURELY_UNSET_VARIABLE_1234"));
    }
}
