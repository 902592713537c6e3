//! Core library entry for the `appkit` CLI.
//!
//! Composes structured prompts from a [`spec::TaskSpec`] and runs lexical
//! retrieval over pasted documents. External collaborators (chat and
//! embedding providers) sit behind the traits in [`ports`].

pub mod adapters;
pub mod app;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod compose;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod retrieve;
pub mod spec;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
