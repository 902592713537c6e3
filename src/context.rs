//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::demo::{DemoChatClient, DemoEmbedder};
use crate::adapters::live::LiveFileSystem;
use crate::adapters::recording::{RecordingChatClient, RecordingEmbedder};
use crate::adapters::replaying::{ReplayingChatClient, ReplayingEmbedder};
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::compose::Message;
use crate::config::AppConfig;
use crate::ports::{ChatClient, ChatFuture, EmbedFuture, Embedder, FileSystem};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (demo, recording, replaying).
pub struct ServiceContext {
    /// Filesystem backing the state store.
    pub fs: Box<dyn FileSystem>,
    /// Chat collaborator receiving composed messages.
    pub chat: Box<dyn ChatClient>,
    /// Embedding collaborator used when documents are added.
    pub embed: Box<dyn Embedder>,
}

impl ServiceContext {
    /// Creates a context with the live filesystem and the demo collaborators.
    #[must_use]
    pub fn live() -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            chat: Box::new(DemoChatClient::new()),
            embed: Box::new(DemoEmbedder::new()),
        }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn with_adapters(
        fs: Box<dyn FileSystem>,
        chat: Box<dyn ChatClient>,
        embed: Box<dyn Embedder>,
    ) -> Self {
        Self { fs, chat, embed }
    }

    /// Creates a recording context whose collaborator calls are captured
    /// into per-port cassettes under `<root>/<timestamp>/`.
    ///
    /// The returned session must be finished after the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(root: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root)?;
        let ctx = Self {
            fs: Box::new(LiveFileSystem),
            chat: Box::new(RecordingChatClient::new(
                Box::new(DemoChatClient::new()),
                std::sync::Arc::clone(&session.chat),
            )),
            embed: Box::new(RecordingEmbedder::new(
                Box::new(DemoEmbedder::new()),
                std::sync::Arc::clone(&session.embed),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Self::replaying_from(&CassetteConfig::monolithic(path))
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette file use a panicking adapter that
    /// fails with a clear message when called. The filesystem stays live.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            fs: Box::new(LiveFileSystem),
            chat: match replayers.chat {
                Some(r) => Box::new(ReplayingChatClient::new(r)),
                None => Box::new(PanickingChatClient),
            },
            embed: match replayers.embed {
                Some(r) => Box::new(ReplayingEmbedder::new(r)),
                None => Box::new(PanickingEmbedder),
            },
        })
    }

    /// Picks the context requested by `config`: replaying, recording or live.
    ///
    /// # Errors
    ///
    /// Returns an error if a cassette cannot be loaded or a recording
    /// session cannot be started.
    pub fn from_config(config: &AppConfig) -> Result<(Self, Option<RecordingSession>), String> {
        if let Some(path) = &config.replay_cassette {
            return Ok((Self::replaying(path)?, None));
        }
        if let Some(root) = &config.record_dir {
            let (ctx, session) = Self::recording_at(root)?;
            return Ok((ctx, Some(session)));
        }
        Ok((Self::live(), None))
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingChatClient;
impl ChatClient for PanickingChatClient {
    fn chat(&self, _messages: &[Message]) -> ChatFuture<'_> {
        panic!("ChatClient port not configured in CassetteConfig: no cassette loaded for chat");
    }
}

struct PanickingEmbedder;
impl Embedder for PanickingEmbedder {
    fn embed(&self, _texts: &[String]) -> EmbedFuture<'_> {
        panic!("Embedder port not configured in CassetteConfig: no cassette loaded for embed");
    }
}
