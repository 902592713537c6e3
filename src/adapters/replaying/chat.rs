//! Replaying adapter for the `ChatClient` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::compose::Message;
use crate::ports::{ChatClient, ChatFuture};

/// Serves recorded chat responses from a cassette.
pub struct ReplayingChatClient {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingChatClient {
    /// Creates a replaying chat client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ChatClient for ReplayingChatClient {
    fn chat(&self, _messages: &[Message]) -> ChatFuture<'_> {
        let output = next_output(&self.replayer, "chat", "chat");
        Box::pin(async move { replay_result(output, "chat::chat") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::error::CollaboratorError;
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(outputs: Vec<serde_json::Value>) -> CassetteReplayer {
        let interactions = outputs
            .into_iter()
            .enumerate()
            .map(|(seq, output)| Interaction {
                seq: seq as u64,
                port: "chat".into(),
                method: "chat".into(),
                input: json!([]),
                output,
            })
            .collect();
        CassetteReplayer::new(&Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        })
    }

    #[tokio::test]
    async fn serves_recorded_responses_in_order() {
        let client = ReplayingChatClient::new(make_replayer(vec![
            json!({"ok": {"output": "first", "tokens": 3}}),
            json!({"ok": {"output": "second", "tokens": 5}}),
        ]));
        assert_eq!(client.chat(&[]).await.unwrap().output, "first");
        assert_eq!(client.chat(&[]).await.unwrap().tokens, 5);
    }

    #[tokio::test]
    async fn replays_recorded_errors() {
        let client = ReplayingChatClient::new(make_replayer(vec![json!({
            "err": {"kind": "chat", "detail": "rate limited"}
        })]));
        let err = client.chat(&[]).await.unwrap_err();
        assert_eq!(err, CollaboratorError::Chat("rate limited".into()));
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn panics_when_cassette_is_exhausted() {
        let client = ReplayingChatClient::new(make_replayer(vec![]));
        let _ = client.chat(&[]);
    }
}
