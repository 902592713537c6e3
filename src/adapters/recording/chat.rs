//! Recording adapter for the `ChatClient` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::compose::Message;
use crate::ports::{ChatClient, ChatFuture};

/// Records chat interactions while delegating to an inner implementation.
pub struct RecordingChatClient {
    inner: Box<dyn ChatClient>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingChatClient {
    /// Creates a new recording chat client wrapping the given implementation.
    pub fn new(inner: Box<dyn ChatClient>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ChatClient for RecordingChatClient {
    fn chat(&self, messages: &[Message]) -> ChatFuture<'_> {
        let messages = messages.to_vec();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.chat(&messages).await;
            record_result(&recorder, "chat", "chat", &messages, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::demo::DemoChatClient;
    use crate::cassette::format::Cassette;

    #[tokio::test]
    async fn records_chat_interaction() {
        let dir = std::env::temp_dir().join("appkit_rec_chat_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("chat.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "abc")));

        // Scope the adapter so it's dropped before we try to unwrap
        {
            let inner = Box::new(DemoChatClient::instant());
            let client = RecordingChatClient::new(inner, Arc::clone(&recorder));
            let response = client.chat(&[Message::user("hello")]).await.unwrap();
            assert_eq!(response.tokens, 42);
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        let interaction = &cassette.interactions[0];
        assert_eq!(interaction.port, "chat");
        assert_eq!(interaction.input[0]["content"], "hello");
        assert_eq!(interaction.output["ok"]["tokens"], 42);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
