//! State store: durable key-value persistence for application state.
//!
//! Every key is stored as its own JSON file, so each entry is written and
//! read independently with last-write-wins semantics. All I/O goes through
//! the `FileSystem` port. Directory layout:
//!
//! ```text
//! <root>/
//!   ├── spec.role.json
//!   ├── spec.constraints.json
//!   ├── ...
//!   ├── appkit.tab.json
//!   └── wp.appkit.docs.json
//! ```

pub mod keys;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::context::ServiceContext;

const EXTENSION: &str = ".json";

/// Key-value store over JSON files.
pub struct StateStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> StateStore<'a> {
    /// Creates a new store rooted at the given path.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent. An entry that no longer
    /// parses as `T` is logged and also reported as absent, so callers fall
    /// back to their default.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be read.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, String> {
        let path = self.key_path(key);
        if !self.ctx.fs.exists(&path) {
            return Ok(None);
        }
        let contents = self
            .ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| format!("Failed to read state key {key}: {e}"))?;
        match serde_json::from_str(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "ignoring unreadable state entry");
                Ok(None)
            }
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), String> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| format!("Failed to serialize state key {key}: {e}"))?;
        self.ctx
            .fs
            .write(&self.key_path(key), &json)
            .map_err(|e| format!("Failed to write state key {key}: {e}"))?;
        debug!(key, "stored state entry");
        Ok(())
    }

    /// Deletes the entry for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<(), String> {
        self.ctx
            .fs
            .remove(&self.key_path(key))
            .map_err(|e| format!("Failed to remove state key {key}: {e}"))
    }

    /// Lists the keys currently stored, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be listed.
    pub fn keys(&self) -> Result<Vec<String>, String> {
        if !self.ctx.fs.exists(&self.root) {
            return Ok(Vec::new());
        }
        let entries = self
            .ctx
            .fs
            .list_dir(&self.root)
            .map_err(|e| format!("Failed to list state store: {e}"))?;
        Ok(entries
            .into_iter()
            .filter_map(|name| name.strip_suffix(EXTENSION).map(String::from))
            .collect())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}{EXTENSION}"))
    }
}
