//! Command dispatch and handlers.

pub mod compose;
pub mod export;
pub mod rag;
pub mod run;
pub mod spec;
pub mod view;

use tokio::runtime::Runtime;
use tracing::debug;

use crate::app::AppState;
use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::AppConfig;
use crate::context::ServiceContext;
use crate::store::StateStore;

/// Dispatch a parsed command to its handler.
///
/// When `APPKIT_RECORD` is set to a directory path, all collaborator calls
/// are recorded to per-port cassette files in that directory. When
/// `APPKIT_REPLAY` names a cassette file, collaborators are served from it.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the selected
/// command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = AppConfig::from_env()?;
    let (ctx, session) = ServiceContext::from_config(&config)?;

    let result = dispatch_with_context(command, &ctx, &config);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context and configuration.
///
/// # Errors
///
/// Returns an error string if the command fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &AppConfig,
) -> Result<(), String> {
    let store = StateStore::new(ctx, &config.store_root);
    let mut state = AppState::load(&store)?;
    debug!(command = ?command, store = %config.store_root.display(), "dispatching");

    let changed = match command {
        Command::Spec(sub) => spec::run(&mut state, &store, sub)?,
        Command::Compose => compose::run(&state)?,
        Command::Run => run::run(&state, ctx, &runtime()?)?,
        Command::Rag(sub) => rag::run(&mut state, sub, ctx, config, &runtime()?)?,
        Command::Export { out } => export::run(&state, ctx, out)?,
        Command::Tab { tab } => view::tab(&mut state, *tab),
        Command::Persona { persona } => view::persona(&mut state, *persona),
    };

    if changed {
        state.save(&store)?;
    }
    Ok(())
}

/// Collaborator futures are awaited one at a time on the calling thread.
fn runtime() -> Result<Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
