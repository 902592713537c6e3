//! `appkit compose` command.

use crate::app::AppState;

/// Print the composed messages as pretty JSON. Never changes state.
///
/// # Errors
///
/// Returns an error string if the messages cannot be serialized.
pub fn run(state: &AppState) -> Result<bool, String> {
    println!("{}", render(state)?);
    Ok(false)
}

fn render(state: &AppState) -> Result<String, String> {
    serde_json::to_string_pretty(&state.messages())
        .map_err(|e| format!("Failed to serialize messages: {e}"))
}
