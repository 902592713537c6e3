//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first (see `main`), so
//! every variable can also be set there.

use std::path::PathBuf;

/// Default number of passages returned by `rag search`.
pub const DEFAULT_SEARCH_K: usize = 5;

const STORE_VAR: &str = "APPKIT_STORE";
const RECORD_VAR: &str = "APPKIT_RECORD";
const REPLAY_VAR: &str = "APPKIT_REPLAY";
const SEARCH_K_VAR: &str = "APPKIT_SEARCH_K";

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the key-value state store.
    pub store_root: PathBuf,
    /// When set, collaborator calls are recorded into cassettes under this directory.
    pub record_dir: Option<PathBuf>,
    /// When set, collaborators are served from this cassette file.
    pub replay_cassette: Option<PathBuf>,
    /// Default `k` for `rag search`.
    pub search_k: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(".appkit"),
            record_dir: None,
            replay_cassette: None,
            search_k: DEFAULT_SEARCH_K,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `APPKIT_SEARCH_K` is not a non-negative integer,
    /// or if both recording and replaying are requested.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let search_k = match non_empty(SEARCH_K_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("{SEARCH_K_VAR} must be a non-negative integer: {e}"))?,
            None => defaults.search_k,
        };

        let config = Self {
            store_root: non_empty(STORE_VAR).map_or(defaults.store_root, PathBuf::from),
            record_dir: non_empty(RECORD_VAR).map(PathBuf::from),
            replay_cassette: non_empty(REPLAY_VAR).map(PathBuf::from),
            search_k,
        };

        if config.record_dir.is_some() && config.replay_cassette.is_some() {
            return Err(format!("{RECORD_VAR} and {REPLAY_VAR} cannot be set together"));
        }
        Ok(config)
    }
}
