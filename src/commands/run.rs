//! `appkit run` command.

use tokio::runtime::Runtime;
use tracing::warn;

use crate::app::AppState;
use crate::context::ServiceContext;

/// Send the composed messages to the chat collaborator and print the reply.
///
/// # Errors
///
/// Returns an error string if the collaborator fails.
pub fn run(state: &AppState, ctx: &ServiceContext, runtime: &Runtime) -> Result<bool, String> {
    let response = runtime.block_on(state.run(ctx.chat.as_ref())).map_err(|e| {
        warn!(error = %e, "chat run failed");
        e.to_string()
    })?;
    println!("Tokens (approx): {}", response.tokens);
    println!();
    println!("{}", response.output);
    Ok(false)
}
