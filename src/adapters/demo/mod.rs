//! Demo collaborators standing in for a real provider backend.
//!
//! They wait a short, fixed delay and answer with canned data so the rest of
//! the application can be exercised end to end without network access.

pub mod chat;
pub mod embed;

pub use chat::DemoChatClient;
pub use embed::DemoEmbedder;

use std::time::Duration;

/// Sleeps for `delay`, skipping the timer entirely when it is zero.
async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
