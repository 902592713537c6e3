//! Core task spec type.

use serde::{Deserialize, Serialize};

use super::options::{Formality, Length};

/// A labelled input handed to the model (e.g. `Dataset: October CSV`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    /// Short label; not required to be unique.
    pub label: String,
    /// Free-text value.
    pub value: String,
}

/// A few-shot example pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// What the user says.
    pub input: String,
    /// What the assistant should answer.
    pub output: String,
}

/// Structured description of a prompting task; the composer's sole input.
///
/// Missing fields deserialize to empty values and unknown fields are ignored,
/// so hand-edited or older exports still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskSpec {
    /// Persona the model plays (e.g. "a conservation AI coach").
    pub role: String,
    /// One-sentence objective.
    pub goal: String,
    /// Who the answer is written for.
    pub audience: String,
    /// Guardrails, in order.
    pub constraints: Vec<String>,
    /// Style adjectives, in order.
    pub style: Vec<String>,
    /// Register of the answer.
    pub formality: Formality,
    /// Target answer length.
    pub length: Length,
    /// Whether the model must cite sources.
    pub citations: bool,
    /// Labelled inputs, in order.
    pub inputs: Vec<InputField>,
    /// Few-shot pairs, in order.
    pub examples: Vec<Example>,
    /// Acceptance criteria, in order.
    pub acceptance: Vec<String>,
}

impl InputField {
    /// Creates an input field.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

impl Example {
    /// Creates an example pair.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self { input: input.into(), output: output.into() }
    }
}

impl TaskSpec {
    /// The water-quality brief the application starts with before anything
    /// has been saved.
    #[must_use]
    pub fn starter() -> Self {
        Self {
            role: "a conservation AI coach".into(),
            goal: "draft a community-friendly water quality brief with one chart and a clear \
                   call to action"
                .into(),
            audience: "Pittsburgh watershed volunteers and local leaders".into(),
            constraints: vec![
                "no sensitive site disclosure".into(),
                "plain language, 8th grade reading level".into(),
                "cite sources".into(),
            ],
            style: vec!["kind".into(), "specific".into(), "evidence-first".into()],
            formality: Formality::Plain,
            length: Length::Medium,
            citations: true,
            inputs: vec![
                InputField::new("Dataset", "October CSV: pH / tempC"),
                InputField::new("Place", "Nine Mile Run"),
            ],
            examples: vec![Example::new(
                "Summarize: tempC increased this week.",
                "This week saw a mild warming (avg +1.2°C).",
            )],
            acceptance: vec![
                "includes one bullet list of findings".into(),
                "one plain-language risk".into(),
                "links to raw data".into(),
            ],
        }
    }
}
