//! Replaying adapter for the `Embedder` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{EmbedFuture, Embedder};

/// Serves recorded embeddings from a cassette.
pub struct ReplayingEmbedder {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEmbedder {
    /// Creates a replaying embedder backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Embedder for ReplayingEmbedder {
    fn embed(&self, _texts: &[String]) -> EmbedFuture<'_> {
        let output = next_output(&self.replayer, "embed", "embed");
        Box::pin(async move { replay_result(output, "embed::embed") })
    }
}
