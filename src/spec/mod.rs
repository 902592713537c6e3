//! Task spec types for structured prompts.
//!
//! Defines the Rust types behind the exported `TaskSpec.json` document.
//! They are persisted by the store and consumed by the composer.

mod fields;
mod options;
mod task_spec;

pub use fields::parse_list;
pub use options::{Formality, Length};
pub use task_spec::{Example, InputField, TaskSpec};
