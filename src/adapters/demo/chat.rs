//! Demo adapter for the `ChatClient` port.

use std::time::Duration;

use tracing::debug;

use super::pause;
use crate::compose::Message;
use crate::ports::chat::{ChatClient, ChatFuture, ChatResponse};

/// Reply returned for every conversation.
pub const DEMO_REPLY: &str =
    "(demo) Connect the chat provider to your backend to get real answers.";

/// Token count reported with [`DEMO_REPLY`].
pub const DEMO_TOKENS: u32 = 42;

const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Chat client that answers every conversation with a canned reply.
pub struct DemoChatClient {
    delay: Duration,
}

impl DemoChatClient {
    /// Creates a demo client with the default 300 ms latency.
    #[must_use]
    pub fn new() -> Self {
        Self { delay: DEFAULT_DELAY }
    }

    /// Creates a demo client that answers immediately.
    #[must_use]
    pub fn instant() -> Self {
        Self { delay: Duration::ZERO }
    }
}

impl Default for DemoChatClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatClient for DemoChatClient {
    fn chat(&self, messages: &[Message]) -> ChatFuture<'_> {
        let count = messages.len();
        Box::pin(async move {
            debug!(messages = count, "demo chat call");
            pause(self.delay).await;
            Ok(ChatResponse { output: DEMO_REPLY.to_string(), tokens: DEMO_TOKENS })
        })
    }
}
