//! Process-wide boolean flags that outlive a session.

use crate::error::FlagStoreError;
use ahash::AHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Set once the onboarding tour has been shown.
pub const ONBOARDING_FLAG: &str = "hasSeenOnboarding";

pub trait FlagStore {
    fn get(&self, key: &str) -> Result<bool, FlagStoreError>;
    fn set(&mut self, key: &str, value: bool) -> Result<(), FlagStoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryFlagStore {
    flags: AHashMap<String, bool>,
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<bool, FlagStoreError> {
        Ok(self.flags.get(key).copied().unwrap_or(false))
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), FlagStoreError> {
        self.flags.insert(key.to_string(), value);
        Ok(())
    }
}

/// Flags kept as a JSON object of booleans in a single file.
///
/// A missing file reads as "no flags set". The file is rewritten on every
/// `set`.
#[derive(Debug, Clone)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> FlagStoreError {
        FlagStoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn load(&self) -> Result<BTreeMap<String, bool>, FlagStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        serde_json::from_str(&content).map_err(|source| FlagStoreError::Parse {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl FlagStore for FileFlagStore {
    fn get(&self, key: &str) -> Result<bool, FlagStoreError> {
        Ok(self.load()?.get(key).copied().unwrap_or(false))
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), FlagStoreError> {
        let mut flags = self.load()?;
        flags.insert(key.to_string(), value);
        let json = serde_json::to_string_pretty(&flags).map_err(|source| FlagStoreError::Parse {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!(key, value, path = %self.path.display(), "flag stored");
        Ok(())
    }
}
