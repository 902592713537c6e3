//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (chat provider, embedding provider, filesystem).
//! Implementations live in `src/adapters/`.

pub mod chat;
pub mod embed;
pub mod filesystem;

pub use chat::{ChatClient, ChatFuture, ChatResponse};
pub use embed::{EmbedFuture, Embedder, Vector};
pub use filesystem::FileSystem;
