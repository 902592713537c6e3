//! Embedding port producing one vector per passage.

use std::future::Future;
use std::pin::Pin;

use crate::error::CollaboratorError;

/// A dense embedding vector.
pub type Vector = Vec<f64>;

/// Boxed future type alias used by [`Embedder`] to keep the trait dyn-compatible.
pub type EmbedFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Vector>, CollaboratorError>> + Send + 'a>>;

/// Computes embeddings for a batch of texts.
pub trait Embedder: Send + Sync {
    /// Returns one vector per entry of `texts`, in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Embedding`] if the provider fails.
    fn embed(&self, texts: &[String]) -> EmbedFuture<'_>;
}
