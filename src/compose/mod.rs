//! Prompt composition.
//!
//! Turns a [`TaskSpec`] into the ordered message list sent to the chat
//! collaborator:
//!
//! ```text
//! system     persona, audience, "follow constraints"
//! user       goal / constraints / citations / style / acceptance
//! user       Inputs: - label: value ...
//! user       example input      ┐ once per example
//! assistant  example output     ┘
//! ```

mod message;

pub use message::{Message, Role};

use std::fmt::Write as _;

use crate::spec::TaskSpec;

const CITATIONS_LINE: &str = "Citations: include sources and URLs when making claims.";

/// Composes the message sequence for `spec`.
///
/// Always yields `3 + 2 * spec.examples.len()` messages. Empty optional
/// sections are left out rather than reported.
#[must_use]
pub fn compose(spec: &TaskSpec) -> Vec<Message> {
    let mut messages = Vec::with_capacity(3 + 2 * spec.examples.len());
    messages.push(Message::system(system_prompt(spec)));
    messages.push(Message::user(instructions(spec)));
    messages.push(Message::user(inputs(spec)));
    for example in &spec.examples {
        messages.push(Message::user(example.input.clone()));
        messages.push(Message::assistant(example.output.clone()));
    }
    messages
}

fn system_prompt(spec: &TaskSpec) -> String {
    format!("You are {}. Write for {}. Follow constraints strictly.", spec.role, spec.audience)
}

fn instructions(spec: &TaskSpec) -> String {
    let lines = [
        Some(format!("Goal: {}", spec.goal)),
        (!spec.constraints.is_empty())
            .then(|| format!("Constraints: {}", spec.constraints.join("; "))),
        spec.citations.then(|| CITATIONS_LINE.to_string()),
        Some(format!(
            "Style: {}. Formality: {}. Length: {}.",
            spec.style.join(", "),
            spec.formality,
            spec.length
        )),
        Some(format!("Acceptance criteria: {}", numbered(&spec.acceptance))),
    ];
    lines.into_iter().flatten().collect::<Vec<_>>().join("\n")
}

/// Renders `["x", "y"]` as `1. x 2. y`.
fn numbered(items: &[String]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}. {item}", i + 1);
    }
    out
}

fn inputs(spec: &TaskSpec) -> String {
    let mut out = String::from("Inputs:");
    for input in &spec.inputs {
        let _ = write!(out, "\n- {}: {}", input.label, input.value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Example, Formality, InputField, Length};

    fn coach_spec() -> TaskSpec {
        TaskSpec {
            role: "coach".into(),
            goal: "summarize".into(),
            audience: "volunteers".into(),
            constraints: vec![],
            style: vec!["kind".into()],
            formality: Formality::Plain,
            length: Length::Short,
            citations: true,
            inputs: vec![InputField::new("X", "Y")],
            examples: vec![],
            acceptance: vec!["be concise".into()],
        }
    }

    #[test]
    fn coach_spec_yields_three_messages() {
        let messages = compose(&coach_spec());
        assert_eq!(messages.len(), 3);

        assert_eq!(messages[0].role, Role::System);
        assert_eq!(
            messages[0].content,
            "You are coach. Write for volunteers. Follow constraints strictly."
        );

        assert_eq!(messages[1].role, Role::User);
        let lines: Vec<&str> = messages[1].content.lines().collect();
        assert_eq!(
            lines,
            [
                "Goal: summarize",
                "Citations: include sources and URLs when making claims.",
                "Style: kind. Formality: plain. Length: short.",
                "Acceptance criteria: 1. be concise",
            ]
        );

        assert_eq!(messages[2].role, Role::User);
        assert_eq!(messages[2].content, "Inputs:\n- X: Y");
    }

    #[test]
    fn omits_constraints_and_citations_when_absent() {
        let spec = TaskSpec { citations: false, ..coach_spec() };
        let instruction = &compose(&spec)[1].content;
        assert!(!instruction.contains("Constraints:"));
        assert!(!instruction.contains("Citations:"));
    }

    #[test]
    fn constraints_are_semicolon_joined() {
        let spec = TaskSpec {
            constraints: vec!["no jargon".into(), "cite sources".into()],
            ..coach_spec()
        };
        let instruction = &compose(&spec)[1].content;
        assert!(instruction.contains("\nConstraints: no jargon; cite sources\n"));
    }

    #[test]
    fn acceptance_criteria_are_numbered_and_space_joined() {
        let spec = TaskSpec {
            acceptance: vec!["one list".into(), "one risk".into(), "raw data".into()],
            ..coach_spec()
        };
        let instruction = &compose(&spec)[1].content;
        assert!(instruction.ends_with("Acceptance criteria: 1. one list 2. one risk 3. raw data"));
    }

    #[test]
    fn style_is_comma_joined() {
        let spec = TaskSpec {
            style: vec!["kind".into(), "specific".into()],
            formality: Formality::Scholarly,
            length: Length::Long,
            ..coach_spec()
        };
        let instruction = &compose(&spec)[1].content;
        assert!(instruction.contains("Style: kind, specific. Formality: scholarly. Length: long."));
    }

    #[test]
    fn inputs_keep_order_and_duplicate_labels() {
        let spec = TaskSpec {
            inputs: vec![
                InputField::new("Place", "Nine Mile Run"),
                InputField::new("Place", "Panther Hollow"),
            ],
            ..coach_spec()
        };
        assert_eq!(
            compose(&spec)[2].content,
            "Inputs:\n- Place: Nine Mile Run\n- Place: Panther Hollow"
        );
    }

    #[test]
    fn no_inputs_leaves_header_only() {
        let spec = TaskSpec { inputs: vec![], ..coach_spec() };
        assert_eq!(compose(&spec)[2].content, "Inputs:");
    }

    #[test]
    fn examples_alternate_user_and_assistant() {
        let spec = TaskSpec {
            examples: vec![Example::new("q1", "a1"), Example::new("q2", "a2")],
            ..coach_spec()
        };
        let messages = compose(&spec);
        assert_eq!(messages.len(), 3 + 2 * 2);
        assert_eq!(messages[3], Message::user("q1"));
        assert_eq!(messages[4], Message::assistant("a1"));
        assert_eq!(messages[5], Message::user("q2"));
        assert_eq!(messages[6], Message::assistant("a2"));
    }

    #[test]
    fn message_count_tracks_examples() {
        for n in 0..5 {
            let spec = TaskSpec {
                examples: (0..n).map(|i| Example::new(format!("in {i}"), "out")).collect(),
                ..TaskSpec::default()
            };
            assert_eq!(compose(&spec).len(), 3 + 2 * n);
        }
    }

    #[test]
    fn compose_is_deterministic() {
        let spec = TaskSpec::starter();
        let first = serde_json::to_string(&compose(&spec)).unwrap();
        let second = serde_json::to_string(&compose(&spec.clone())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_spec_still_composes() {
        let messages = compose(&TaskSpec::default());
        assert_eq!(messages.len(), 3);
        assert_eq!(
            messages[1].content,
            "Goal: \nStyle: . Formality: plain. Length: medium.\nAcceptance criteria: "
        );
    }
}
