//! Chat port for sending composed messages to a language model.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::compose::Message;
use crate::error::CollaboratorError;

/// Boxed future type alias used by [`ChatClient`] to keep the trait dyn-compatible.
pub type ChatFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ChatResponse, CollaboratorError>> + Send + 'a>>;

/// The provider's answer to a chat call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text.
    pub output: String,
    /// Approximate number of tokens used.
    pub tokens: u32,
}

/// Sends a composed conversation to a language model.
pub trait ChatClient: Send + Sync {
    /// Runs one chat turn over `messages`.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::Chat`] if the provider fails.
    fn chat(&self, messages: &[Message]) -> ChatFuture<'_>;
}
