//! Replaying adapters that replay recorded interactions.

pub mod chat;
pub mod embed;

pub use chat::ReplayingChatClient;
pub use embed::ReplayingEmbedder;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::CollaboratorError;

/// Pull the next recorded output for `port::method` off the replayer.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output.clone()
}

/// Decode an output written by `recording::record_result`.
///
/// `{"ok": v}` deserializes `v`; `{"err": e}` yields the recorded error.
/// An output that is neither is treated as a bare `ok` value.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T, CollaboratorError> {
    if let Some(err) = output.get("err") {
        let err: CollaboratorError = serde_json::from_value(err.clone())
            .unwrap_or_else(|e| panic!("{context}: failed to deserialize recorded error: {e}"));
        return Err(err);
    }
    let value = output.get("ok").cloned().unwrap_or(output);
    Ok(serde_json::from_value(value)
        .unwrap_or_else(|e| panic!("{context}: failed to deserialize recorded output: {e}")))
}
