//! Binary entrypoint for the `appkit` CLI.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // A missing .env file is fine; variables may come from the shell.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("appkit=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Recording and replay are selected in commands::dispatch via
    // APPKIT_RECORD=<dir> and APPKIT_REPLAY=<cassette>.
    match appkit::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
