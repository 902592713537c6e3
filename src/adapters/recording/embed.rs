//! Recording adapter for the `Embedder` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{EmbedFuture, Embedder};

/// Records embedding interactions while delegating to an inner implementation.
pub struct RecordingEmbedder {
    inner: Box<dyn Embedder>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEmbedder {
    /// Creates a new recording embedder wrapping the given implementation.
    pub fn new(inner: Box<dyn Embedder>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Embedder for RecordingEmbedder {
    fn embed(&self, texts: &[String]) -> EmbedFuture<'_> {
        let texts = texts.to_vec();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.embed(&texts).await;
            record_result(&recorder, "embed", "embed", &texts, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use crate::error::CollaboratorError;

    struct BrokenEmbedder;

    impl Embedder for BrokenEmbedder {
        fn embed(&self, _texts: &[String]) -> EmbedFuture<'_> {
            Box::pin(async { Err(CollaboratorError::Embedding("quota exceeded".into())) })
        }
    }

    #[tokio::test]
    async fn records_errors_as_err_entries() {
        let dir = std::env::temp_dir().join("appkit_rec_embed_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("embed.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "abc")));
        {
            let embedder = RecordingEmbedder::new(Box::new(BrokenEmbedder), Arc::clone(&recorder));
            assert!(embedder.embed(&["a".to_string()]).await.is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        let interaction = &cassette.interactions[0];
        assert_eq!(interaction.port, "embed");
        assert_eq!(interaction.input, serde_json::json!(["a"]));
        assert_eq!(
            interaction.output["err"],
            serde_json::json!({"kind": "embedding", "detail": "quota exceeded"})
        );

        let _ = std::fs::remove_dir_all(&dir);
    }
}
