//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a cassette path panic if
/// called during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the chat port cassette file.
    pub chat: Option<PathBuf>,
    /// Path to the embedding port cassette file.
    pub embed: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the chat port.
    pub chat: Option<CassetteReplayer>,
    /// Replayer for the embedding port.
    pub embed: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Returns a config where all port paths are `None`.
    #[must_use]
    pub fn panic_on_unspecified() -> Self {
        Self::default()
    }

    /// Points every port at the same cassette file.
    #[must_use]
    pub fn monolithic(path: &Path) -> Self {
        Self { chat: Some(path.to_path_buf()), embed: Some(path.to_path_buf()) }
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let load = |path: &Path| Cassette::load(path).map(|c| CassetteReplayer::new(&c));
        Ok(PortReplayers {
            chat: self.chat.as_deref().map(load).transpose()?,
            embed: self.embed.as_deref().map(load).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    #[test]
    fn panic_on_unspecified_returns_all_none() {
        let config = CassetteConfig::panic_on_unspecified();
        assert!(config.chat.is_none());
        assert!(config.embed.is_none());
        let replayers = config.load_all().unwrap();
        assert!(replayers.chat.is_none());
        assert!(replayers.embed.is_none());
    }

    #[test]
    fn load_per_port_cassettes() {
        let dir = std::env::temp_dir().join("appkit_config_test_ports");
        std::fs::create_dir_all(&dir).unwrap();

        let chat_path = dir.join("chat.cassette.yaml");
        let mut recorder = CassetteRecorder::new(&chat_path, "chat", "abc");
        recorder.record("chat", "chat", json!([]), json!({"ok": {"output": "hi", "tokens": 1}}));
        recorder.finish().unwrap();

        let config = CassetteConfig { chat: Some(chat_path), ..CassetteConfig::default() };
        let mut replayers = config.load_all().unwrap();

        let chat = replayers.chat.as_mut().unwrap();
        assert_eq!(chat.next_interaction("chat", "chat").output["ok"]["output"], "hi");
        assert!(replayers.embed.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn monolithic_shares_one_file() {
        let path = Path::new("/tmp/full.cassette.yaml");
        let config = CassetteConfig::monolithic(path);
        assert_eq!(config.chat.as_deref(), Some(path));
        assert_eq!(config.embed.as_deref(), Some(path));
    }

    #[test]
    fn load_all_reports_missing_file() {
        let config = CassetteConfig {
            embed: Some(PathBuf::from("/nonexistent/embed.cassette.yaml")),
            ..CassetteConfig::default()
        };
        assert!(config.load_all().is_err());
    }
}
