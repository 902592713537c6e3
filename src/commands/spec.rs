//! `appkit spec` commands.

use std::fmt::Write as _;

use crate::app::AppState;
use crate::cli::SpecCommand;
use crate::spec::TaskSpec;
use crate::store::StateStore;

/// Execute a `spec` subcommand. Returns whether state needs saving.
///
/// # Errors
///
/// Returns an error string for an unknown field, an unparsable value, an
/// input/example position that is out of range, or a failed store update.
pub fn run(
    state: &mut AppState,
    store: &StateStore<'_>,
    command: &SpecCommand,
) -> Result<bool, String> {
    match command {
        SpecCommand::Show => {
            print!("{}", render(state.spec()));
            Ok(false)
        }
        SpecCommand::Set { field, value } => {
            set_field(state, field, value)?;
            println!("Updated {field}.");
            Ok(true)
        }
        SpecCommand::AddInput { label, value } => {
            if !state.add_input(label, value) {
                return Err("Input label and value must not be blank".to_string());
            }
            println!("Added input {}.", state.spec().inputs.len());
            Ok(true)
        }
        SpecCommand::RemoveInput { index } => {
            let removed = index.checked_sub(1).is_some_and(|i| state.remove_input(i));
            if !removed {
                return Err(format!(
                    "No input at position {index} (have {})",
                    state.spec().inputs.len()
                ));
            }
            println!("Removed input {index}.");
            Ok(true)
        }
        SpecCommand::AddExample(args) => {
            state.add_example(args.input.as_deref(), args.output.as_deref());
            println!("Added example {}.", state.spec().examples.len());
            Ok(true)
        }
        SpecCommand::EditExample { index, text } => {
            let edited = index.checked_sub(1).is_some_and(|i| {
                state.update_example(i, text.input.as_deref(), text.output.as_deref())
            });
            if !edited {
                return Err(format!(
                    "No example at position {index} (have {})",
                    state.spec().examples.len()
                ));
            }
            println!("Updated example {index}.");
            Ok(true)
        }
        SpecCommand::Reset => {
            // The removed entries fall back to starter values on load.
            state.reset_spec(store)?;
            println!("Spec reset to starter values.");
            Ok(false)
        }
    }
}

/// Applies `value` to the named field, splitting list fields the way the
/// intake form does.
///
/// # Errors
///
/// Returns an error string for an unknown field or an unparsable value.
pub fn set_field(state: &mut AppState, field: &str, value: &str) -> Result<(), String> {
    match field {
        "role" => state.set_role(value),
        "goal" => state.set_goal(value),
        "audience" => state.set_audience(value),
        "style" => state.set_style_text(value),
        "constraints" => state.set_constraints_text(value),
        "acceptance" => state.set_acceptance_text(value),
        "formality" => state.set_formality(value.parse()?),
        "length" => state.set_length(value.parse()?),
        "citations" => state.set_citations(parse_flag(value)?),
        other => {
            return Err(format!(
                "Unknown field '{other}' (expected one of: role, goal, audience, style, \
                 constraints, acceptance, formality, length, citations)"
            ))
        }
    }
    Ok(())
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("Expected true or false, got '{other}'")),
    }
}

fn render(spec: &TaskSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Role: {}", spec.role);
    let _ = writeln!(out, "Goal: {}", spec.goal);
    let _ = writeln!(out, "Audience: {}", spec.audience);
    let _ = writeln!(out, "Style: {}", spec.style.join(", "));
    let _ = writeln!(out, "Formality: {}", spec.formality);
    let _ = writeln!(out, "Length: {}", spec.length);
    let _ = writeln!(out, "Citations: {}", if spec.citations { "required" } else { "off" });

    let _ = writeln!(out, "\nConstraints:");
    for constraint in &spec.constraints {
        let _ = writeln!(out, "  - {constraint}");
    }

    let _ = writeln!(out, "\nInputs:");
    for (i, input) in spec.inputs.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}: {}", i + 1, input.label, input.value);
    }

    let _ = writeln!(out, "\nExamples:");
    for (i, example) in spec.examples.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} => {}", i + 1, example.input, example.output);
    }

    let _ = writeln!(out, "\nAcceptance Criteria:");
    for (i, criterion) in spec.acceptance.iter().enumerate() {
        let _ = writeln!(out, "  {}. {criterion}", i + 1);
    }
    out
}
