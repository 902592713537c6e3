//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::{Persona, Tab};

/// Top-level CLI parser for `appkit`.
#[derive(Debug, Parser)]
#[command(name = "appkit", version, about = "Compose LLM prompts and search pasted documents")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect or edit the task spec.
    #[command(subcommand)]
    Spec(SpecCommand),
    /// Print the composed chat messages as JSON.
    Compose,
    /// Send the composed messages to the chat provider.
    Run,
    /// Manage and search the retrieval corpus.
    #[command(subcommand)]
    Rag(RagCommand),
    /// Write the task spec as JSON.
    Export {
        /// Output path, or `-` for stdout.
        #[arg(long, short, default_value = "TaskSpec.json")]
        out: PathBuf,
    },
    /// Show or switch the open tab.
    Tab {
        /// Tab to switch to.
        tab: Option<Tab>,
    },
    /// Show or switch the persona.
    Persona {
        /// Persona to switch to.
        persona: Option<Persona>,
    },
}

/// `appkit spec` subcommands.
#[derive(Debug, Subcommand)]
pub enum SpecCommand {
    /// Print every field of the spec.
    Show,
    /// Set one field from text.
    ///
    /// List fields split their text: `style` on commas, `constraints` on
    /// semicolons, `acceptance` on newlines.
    Set {
        /// One of: role, goal, audience, style, constraints, acceptance,
        /// formality, length, citations.
        field: String,
        /// New value.
        value: String,
    },
    /// Append a labelled input.
    AddInput {
        /// Input label.
        label: String,
        /// Input value.
        value: String,
    },
    /// Remove an input by its 1-based position.
    RemoveInput {
        /// Position as shown by `spec show`.
        index: usize,
    },
    /// Append a worked example.
    AddExample(ExampleArgs),
    /// Edit an example by its 1-based position.
    EditExample {
        /// Position as shown by `spec show`.
        index: usize,
        /// Replacement text; omitted halves are kept.
        #[command(flatten)]
        text: ExampleArgs,
    },
    /// Restore the starter spec.
    Reset,
}

/// Example text; which halves are optional depends on the command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// Example input.
    #[arg(long)]
    pub input: Option<String>,
    /// Expected output.
    #[arg(long)]
    pub output: Option<String>,
}

/// `appkit rag` subcommands.
#[derive(Debug, Subcommand)]
pub enum RagCommand {
    /// Chunk, embed and store a document.
    Add {
        /// Document name.
        name: String,
        /// Document text.
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,
        /// Read document text from a file.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Rank passages against a query.
    Search {
        /// Query text.
        query: String,
        /// Number of hits to show (defaults to `APPKIT_SEARCH_K`).
        #[arg(short)]
        k: Option<usize>,
    },
    /// List stored documents.
    List,
    /// Remove every document.
    Clear,
}
