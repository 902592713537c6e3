//! `appkit rag` commands.

use tokio::runtime::Runtime;

use crate::app::AppState;
use crate::cli::RagCommand;
use crate::config::AppConfig;
use crate::context::ServiceContext;
use crate::retrieve::{tokenize, SearchHit};

/// Execute a `rag` subcommand. Returns whether state changed.
///
/// # Errors
///
/// Returns an error string if the document file cannot be read or the
/// embedding collaborator fails.
pub fn run(
    state: &mut AppState,
    command: &RagCommand,
    ctx: &ServiceContext,
    config: &AppConfig,
    runtime: &Runtime,
) -> Result<bool, String> {
    match command {
        RagCommand::Add { name, text, file } => {
            let text = match (text, file) {
                (Some(text), _) => text.clone(),
                (None, Some(path)) => ctx
                    .fs
                    .read_to_string(path)
                    .map_err(|e| format!("Failed to read {}: {e}", path.display()))?,
                (None, None) => return Err("Provide --text or --file".to_string()),
            };
            let added = runtime
                .block_on(state.add_document(ctx.embed.as_ref(), name, &text))
                .map_err(|e| e.to_string())?;
            if !added {
                println!("Nothing added: name and text must not be empty.");
                return Ok(false);
            }
            let passages = state.corpus().documents().last().map_or(0, |d| d.parts.len());
            println!("Added {name} ({passages} passages).");
            Ok(true)
        }
        RagCommand::Search { query, k } => {
            let hits = search(state, query, k.unwrap_or(config.search_k));
            if hits.is_empty() {
                println!("No results.");
            }
            for hit in &hits {
                print!("{}", render_hit(hit));
            }
            Ok(false)
        }
        RagCommand::List => {
            if state.corpus().is_empty() {
                println!("No documents.");
            }
            for doc in state.corpus().documents() {
                println!("{} ({} passages)", doc.name, doc.parts.len());
            }
            Ok(false)
        }
        RagCommand::Clear => {
            state.clear_corpus();
            println!("Corpus cleared.");
            Ok(true)
        }
    }
}

/// A query without word tokens matches nothing rather than every passage.
fn search(state: &AppState, query: &str, k: usize) -> Vec<SearchHit> {
    if tokenize(query).is_empty() {
        return Vec::new();
    }
    state.search(query, k)
}

fn render_hit(hit: &SearchHit) -> String {
    format!("{} · score {:.2}\n{}\n\n", hit.doc, hit.score, hit.text)
}
