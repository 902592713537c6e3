//! Lexical retrieval over pasted documents.
//!
//! Documents are split into passages at blank lines; a query is scored
//! against every passage by Jaccard similarity of lowercase word-token sets.
//! This is a brute-force scan sized for a handful of documents.

mod chunk;
mod corpus;
mod score;

pub use chunk::chunk;
pub use corpus::{Corpus, Document, SearchHit};
pub use score::{jaccard, tokenize};
