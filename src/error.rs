//! Errors raised at the collaborator boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a chat or embedding collaborator.
///
/// Core composition and search never produce this; it only appears where
/// the application awaits an external provider. Serializable so recorded
/// failures replay as the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum CollaboratorError {
    /// The chat provider rejected or failed the request.
    #[error("chat provider failed: {0}")]
    Chat(String),

    /// The embedding provider rejected or failed the request.
    #[error("embedding provider failed: {0}")]
    Embedding(String),

    /// The embedding provider answered with the wrong number of vectors.
    #[error("embedding provider returned {got} vectors for {expected} passages")]
    VectorCount {
        /// Number of passages sent.
        expected: usize,
        /// Number of vectors received.
        got: usize,
    },
}
