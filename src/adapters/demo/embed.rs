//! Demo adapter for the `Embedder` port.

use std::time::Duration;

use tracing::debug;

use super::pause;
use crate::ports::embed::{EmbedFuture, Embedder, Vector};

/// Dimensionality of the placeholder vectors.
pub const DEMO_DIM: usize = 8;

const DEFAULT_DELAY: Duration = Duration::from_millis(150);

/// Embedder producing deterministic placeholder vectors.
///
/// The vector for the `i`-th text is `sin((i + 1) * (j + 1))` for
/// `j in 0..8`; it depends only on position, never on content.
pub struct DemoEmbedder {
    delay: Duration,
}

impl DemoEmbedder {
    /// Creates a demo embedder with the default 150 ms latency.
    #[must_use]
    pub fn new() -> Self {
        Self { delay: DEFAULT_DELAY }
    }

    /// Creates a demo embedder that answers immediately.
    #[must_use]
    pub fn instant() -> Self {
        Self { delay: Duration::ZERO }
    }
}

impl Default for DemoEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::cast_precision_loss)]
fn placeholder(position: usize) -> Vector {
    (0..DEMO_DIM).map(|j| (((position + 1) * (j + 1)) as f64).sin()).collect()
}

impl Embedder for DemoEmbedder {
    fn embed(&self, texts: &[String]) -> EmbedFuture<'_> {
        let count = texts.len();
        Box::pin(async move {
            debug!(texts = count, "demo embed call");
            pause(self.delay).await;
            Ok((0..count).map(placeholder).collect())
        })
    }
}
