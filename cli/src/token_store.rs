//! File-backed durable key/value storage for the session token.
//!
//! The file is a flat JSON object (`{"token": "..."}`), the native stand-in
//! for browser `localStorage`. A missing file reads as empty.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::CliError;

#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl TokenStore {
    /// Load the store at `path`, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Storage`] if the file exists but cannot be read or
    /// is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| CliError::storage(&path, e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(CliError::storage(&path, e)),
        };
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Write `value` under `key` and flush to disk.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Storage`] if the file cannot be written.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CliError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    /// Remove `key` and flush to disk. Returns whether the key was present.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Storage`] if the file cannot be written.
    pub fn remove(&mut self, key: &str) -> Result<bool, CliError> {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.flush()?;
        }
        Ok(existed)
    }

    fn flush(&self) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CliError::storage(&self.path, e))?;
        }
        let rendered = serde_json::to_string_pretty(&self.entries).map_err(|e| CliError::storage(&self.path, e))?;
        std::fs::write(&self.path, rendered).map_err(|e| CliError::storage(&self.path, e))
    }
}
