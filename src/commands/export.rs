//! `appkit export` command.

use std::path::Path;

use crate::app::AppState;
use crate::context::ServiceContext;

/// Write the spec as pretty JSON to `out`, or to stdout when `out` is `-`.
///
/// # Errors
///
/// Returns an error string if serialization or the write fails.
pub fn run(state: &AppState, ctx: &ServiceContext, out: &Path) -> Result<bool, String> {
    let json = state.export_spec()?;
    if out == Path::new("-") {
        println!("{json}");
    } else {
        ctx.fs
            .write(out, &format!("{json}\n"))
            .map_err(|e| format!("Failed to write {}: {e}", out.display()))?;
        println!("Exported task spec to {}", out.display());
    }
    Ok(false)
}
