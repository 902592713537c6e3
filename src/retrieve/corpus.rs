//! In-memory corpus of chunked documents.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::chunk::chunk;
use super::score::{jaccard, tokenize};
use crate::error::CollaboratorError;
use crate::ports::embed::{Embedder, Vector};

/// A named document split into passages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Display name given when the document was added.
    pub name: String,
    /// Trimmed, non-empty passages in text order.
    pub parts: Vec<String>,
    /// One placeholder embedding per passage. Not used for scoring.
    #[serde(default, alias = "vecs")]
    pub vectors: Vec<Vector>,
}

/// A scored passage returned by [`Corpus::search`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Name of the document the passage belongs to.
    pub doc: String,
    /// Index of the passage within its document.
    pub idx: usize,
    /// Passage text.
    pub text: String,
    /// Jaccard similarity to the query, in `[0, 1]`.
    pub score: f64,
}

/// Ordered, append-only collection of documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Creates an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents in the order they were added.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if no document has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total number of passages across all documents.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.documents.iter().map(|d| d.parts.len()).sum()
    }

    /// Chunks `text`, embeds the passages and appends the document.
    ///
    /// Empty text yields a document with no passages. The corpus is left
    /// untouched if the embedder fails.
    ///
    /// # Errors
    ///
    /// Returns the embedder's [`CollaboratorError`], or
    /// [`CollaboratorError::VectorCount`] if it answers with the wrong number
    /// of vectors.
    pub async fn add_document(
        &mut self,
        embedder: &dyn Embedder,
        name: &str,
        text: &str,
    ) -> Result<&Document, CollaboratorError> {
        let parts = chunk(text);
        debug!(name, passages = parts.len(), "embedding document");
        let vectors = embedder.embed(&parts).await?;
        if vectors.len() != parts.len() {
            return Err(CollaboratorError::VectorCount {
                expected: parts.len(),
                got: vectors.len(),
            });
        }

        info!(name, passages = parts.len(), "added document to corpus");
        let index = self.documents.len();
        self.documents.push(Document { name: name.to_string(), parts, vectors });
        Ok(&self.documents[index])
    }

    /// Returns the `k` passages most similar to `query`.
    ///
    /// Every passage is scored; equal scores keep corpus order, then
    /// passage order.
    #[must_use]
    pub fn search(&self, query: &str, k: usize) -> Vec<SearchHit> {
        if self.documents.is_empty() || k == 0 {
            return Vec::new();
        }

        let query_tokens = tokenize(query);
        let mut hits: Vec<SearchHit> = self
            .documents
            .iter()
            .flat_map(|doc| {
                doc.parts.iter().enumerate().map(|(idx, part)| SearchHit {
                    doc: doc.name.clone(),
                    idx,
                    text: part.clone(),
                    score: jaccard(&query_tokens, &tokenize(part)),
                })
            })
            .collect();

        // `sort_by` is stable, which gives the documented tie-break.
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(k);
        debug!(query, k, returned = hits.len(), "searched corpus");
        hits
    }

    /// Drops every document.
    pub fn clear(&mut self) {
        self.documents.clear();
    }
}
