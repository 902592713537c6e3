//! Application state owned by the top-level controller.
//!
//! `AppState` bundles the task spec, retrieval corpus, open tab and
//! persona. Field mutators change memory only; `load` and `save` move the
//! whole state through the [`StateStore`] one key at a time.

mod view;

pub use view::{Persona, Tab};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::compose::{compose, Message};
use crate::error::CollaboratorError;
use crate::ports::{ChatClient, ChatResponse, Embedder};
use crate::retrieve::{Corpus, SearchHit};
use crate::spec::{parse_list, Example, Formality, InputField, Length, TaskSpec};
use crate::store::{keys, StateStore};

/// Placeholder text for a freshly added example's input.
pub const EXAMPLE_INPUT_PLACEHOLDER: &str = "Input example";
/// Placeholder text for a freshly added example's output.
pub const EXAMPLE_OUTPUT_PLACEHOLDER: &str = "Expected output";

/// Everything the application persists between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    tab: Tab,
    persona: Persona,
    spec: TaskSpec,
    corpus: Corpus,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            persona: Persona::default(),
            spec: TaskSpec::starter(),
            corpus: Corpus::new(),
        }
    }
}

impl AppState {
    /// Loads every key from `store`, using the starter value for any key
    /// that is absent or unreadable.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing entry cannot be read.
    pub fn load(store: &StateStore<'_>) -> Result<Self, String> {
        fn or<T: DeserializeOwned>(
            store: &StateStore<'_>,
            key: &str,
            fallback: T,
        ) -> Result<T, String> {
            Ok(store.get(key)?.unwrap_or(fallback))
        }

        let starter = TaskSpec::starter();
        let spec = TaskSpec {
            role: or(store, keys::SPEC_ROLE, starter.role)?,
            goal: or(store, keys::SPEC_GOAL, starter.goal)?,
            audience: or(store, keys::SPEC_AUDIENCE, starter.audience)?,
            constraints: or(store, keys::SPEC_CONSTRAINTS, starter.constraints)?,
            style: or(store, keys::SPEC_STYLE, starter.style)?,
            formality: or(store, keys::SPEC_FORMALITY, starter.formality)?,
            length: or(store, keys::SPEC_LENGTH, starter.length)?,
            citations: or(store, keys::SPEC_CITATIONS, starter.citations)?,
            inputs: or(store, keys::SPEC_INPUTS, starter.inputs)?,
            examples: or(store, keys::SPEC_EXAMPLES, starter.examples)?,
            acceptance: or(store, keys::SPEC_ACCEPTANCE, starter.acceptance)?,
        };

        Ok(Self {
            tab: or(store, keys::TAB, Tab::default())?,
            persona: or(store, keys::PERSONA, Persona::default())?,
            spec,
            corpus: or(store, keys::DOCS, Corpus::new())?,
        })
    }

    /// Writes every key to `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry cannot be written.
    pub fn save(&self, store: &StateStore<'_>) -> Result<(), String> {
        let spec = &self.spec;
        store.put(keys::SPEC_ROLE, &spec.role)?;
        store.put(keys::SPEC_GOAL, &spec.goal)?;
        store.put(keys::SPEC_AUDIENCE, &spec.audience)?;
        store.put(keys::SPEC_CONSTRAINTS, &spec.constraints)?;
        store.put(keys::SPEC_STYLE, &spec.style)?;
        store.put(keys::SPEC_FORMALITY, &spec.formality)?;
        store.put(keys::SPEC_LENGTH, &spec.length)?;
        store.put(keys::SPEC_CITATIONS, &spec.citations)?;
        store.put(keys::SPEC_INPUTS, &spec.inputs)?;
        store.put(keys::SPEC_EXAMPLES, &spec.examples)?;
        store.put(keys::SPEC_ACCEPTANCE, &spec.acceptance)?;
        store.put(keys::TAB, &self.tab)?;
        store.put(keys::PERSONA, &self.persona)?;
        store.put(keys::DOCS, &self.corpus)?;
        Ok(())
    }

    /// The current task spec.
    #[must_use]
    pub fn spec(&self) -> &TaskSpec {
        &self.spec
    }

    /// The retrieval corpus.
    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The open tab.
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// The selected persona.
    #[must_use]
    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Switches tab.
    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Switches persona.
    pub fn set_persona(&mut self, persona: Persona) {
        self.persona = persona;
    }

    /// Restores the starter spec and deletes the persisted spec entries,
    /// so later loads fall back to starter values.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be listed or an entry removed.
    pub fn reset_spec(&mut self, store: &StateStore<'_>) -> Result<(), String> {
        let stored = store.keys()?;
        let spec_keys: Vec<&String> =
            stored.iter().filter(|key| keys::SPEC_KEYS.contains(&key.as_str())).collect();
        for key in &spec_keys {
            store.remove(key)?;
        }
        info!(removed = spec_keys.len(), "reset task spec");
        self.spec = TaskSpec::starter();
        Ok(())
    }

    /// Sets the persona description.
    pub fn set_role(&mut self, role: impl Into<String>) {
        self.spec.role = role.into();
    }

    /// Sets the objective.
    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.spec.goal = goal.into();
    }

    /// Sets the audience.
    pub fn set_audience(&mut self, audience: impl Into<String>) {
        self.spec.audience = audience.into();
    }

    /// Sets style from comma-separated text.
    pub fn set_style_text(&mut self, text: &str) {
        self.spec.style = parse_list(text, ',');
    }

    /// Sets constraints from semicolon-separated text.
    pub fn set_constraints_text(&mut self, text: &str) {
        self.spec.constraints = parse_list(text, ';');
    }

    /// Sets acceptance criteria from one-per-line text.
    pub fn set_acceptance_text(&mut self, text: &str) {
        self.spec.acceptance = parse_list(text, '\n');
    }

    /// Sets the formality option.
    pub fn set_formality(&mut self, formality: Formality) {
        self.spec.formality = formality;
    }

    /// Sets the length option.
    pub fn set_length(&mut self, length: Length) {
        self.spec.length = length;
    }

    /// Sets whether citations are required.
    pub fn set_citations(&mut self, citations: bool) {
        self.spec.citations = citations;
    }

    /// Appends a labelled input. Returns `false`, changing nothing, when the
    /// label or value is blank.
    pub fn add_input(&mut self, label: &str, value: &str) -> bool {
        if label.trim().is_empty() || value.trim().is_empty() {
            return false;
        }
        self.spec.inputs.push(InputField::new(label, value));
        true
    }

    /// Removes the input at `index` (0-based). Returns `false` if out of range.
    pub fn remove_input(&mut self, index: usize) -> bool {
        if index >= self.spec.inputs.len() {
            return false;
        }
        self.spec.inputs.remove(index);
        true
    }

    /// Appends an example, using placeholder text for missing halves.
    pub fn add_example(&mut self, input: Option<&str>, output: Option<&str>) {
        self.spec.examples.push(Example::new(
            input.unwrap_or(EXAMPLE_INPUT_PLACEHOLDER),
            output.unwrap_or(EXAMPLE_OUTPUT_PLACEHOLDER),
        ));
    }

    /// Edits the example at `index` (0-based). Returns `false` if out of range.
    pub fn update_example(
        &mut self,
        index: usize,
        input: Option<&str>,
        output: Option<&str>,
    ) -> bool {
        let Some(example) = self.spec.examples.get_mut(index) else {
            return false;
        };
        if let Some(input) = input {
            example.input = input.to_string();
        }
        if let Some(output) = output {
            example.output = output.to_string();
        }
        true
    }

    /// Messages composed from the current spec.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        compose(&self.spec)
    }

    /// The spec as pretty-printed JSON, as written to `TaskSpec.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_spec(&self) -> Result<String, String> {
        serde_json::to_string_pretty(&self.spec)
            .map_err(|e| format!("Failed to serialize task spec: {e}"))
    }

    /// Sends the composed messages to the chat collaborator once.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's error unchanged.
    pub async fn run(&self, chat: &dyn ChatClient) -> Result<ChatResponse, CollaboratorError> {
        let messages = self.messages();
        info!(messages = messages.len(), "sending composed messages to chat provider");
        chat.chat(&messages).await
    }

    /// Adds a document to the corpus. Returns `Ok(false)` without calling the
    /// embedder when the name or text is empty.
    ///
    /// # Errors
    ///
    /// Returns the embedder's error; the corpus is unchanged in that case.
    pub async fn add_document(
        &mut self,
        embedder: &dyn Embedder,
        name: &str,
        text: &str,
    ) -> Result<bool, CollaboratorError> {
        if name.is_empty() || text.is_empty() {
            return Ok(false);
        }
        self.corpus.add_document(embedder, name, text).await?;
        Ok(true)
    }

    /// Searches the corpus.
    #[must_use]
    pub fn search(&self, query: &str, k: usize) -> Vec<SearchHit> {
        self.corpus.search(query, k)
    }

    /// Empties the corpus.
    pub fn clear_corpus(&mut self) {
        self.corpus.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::demo::{DemoChatClient, DemoEmbedder};
    use crate::store::tests::mem_context;
    use std::path::Path;

    #[test]
    fn empty_store_loads_starter_state() {
        let ctx = mem_context();
        let store = StateStore::new(&ctx, Path::new("/store"));
        let state = AppState::load(&store).unwrap();
        assert_eq!(state, AppState::default());
        assert_eq!(state.spec().role, "a conservation AI coach");
        assert_eq!(state.tab(), Tab::Intake);
        assert_eq!(state.persona(), Persona::Conservation);
    }

    #[tokio::test]
    async fn save_then_load_restores_everything() {
        let ctx = mem_context();
        let store = StateStore::new(&ctx, Path::new("/store"));

        let mut state = AppState::default();
        state.set_goal("summarize");
        state.set_tab(Tab::Rag);
        state.set_persona(Persona::Teen);
        state.set_formality(Formality::Scholarly);
        state.add_document(&DemoEmbedder::instant(), "D", "a\n\nb").await.unwrap();
        state.save(&store).unwrap();

        let loaded = AppState::load(&store).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn keys_load_independently() {
        let ctx = mem_context();
        let store = StateStore::new(&ctx, Path::new("/store"));
        store.put(keys::SPEC_GOAL, "only the goal").unwrap();

        let state = AppState::load(&store).unwrap();
        assert_eq!(state.spec().goal, "only the goal");
        assert_eq!(state.spec().audience, TaskSpec::starter().audience);
    }

    #[test]
    fn reset_spec_removes_only_spec_entries() {
        let ctx = mem_context();
        let store = StateStore::new(&ctx, Path::new("/store"));

        let mut state = AppState::default();
        state.set_goal("temporary goal");
        state.set_tab(Tab::Work);
        state.save(&store).unwrap();

        state.reset_spec(&store).unwrap();
        assert_eq!(state.spec(), &TaskSpec::starter());
        assert_eq!(store.keys().unwrap(), ["appkit.persona", "appkit.tab", "wp.appkit.docs"]);

        let loaded = AppState::load(&store).unwrap();
        assert_eq!(loaded.spec(), &TaskSpec::starter());
        assert_eq!(loaded.tab(), Tab::Work);
    }

    #[test]
    fn form_text_is_split_per_field() {
        let mut state = AppState::default();
        state.set_style_text("kind, specific,");
        state.set_constraints_text("no jargon; cite sources;");
        state.set_acceptance_text("one list\n\none risk");
        assert_eq!(state.spec().style, ["kind", "specific"]);
        assert_eq!(state.spec().constraints, ["no jargon", "cite sources"]);
        assert_eq!(state.spec().acceptance, ["one list", "one risk"]);
    }

    #[test]
    fn add_input_rejects_blank_fields() {
        let mut state = AppState::default();
        let before = state.spec().inputs.len();
        assert!(!state.add_input("  ", "value"));
        assert!(!state.add_input("Label", ""));
        assert!(state.add_input("Season", "Autumn"));
        assert_eq!(state.spec().inputs.len(), before + 1);
        assert_eq!(state.spec().inputs[before], InputField::new("Season", "Autumn"));
    }

    #[test]
    fn remove_input_checks_range() {
        let mut state = AppState::default();
        assert!(!state.remove_input(99));
        assert!(state.remove_input(0));
        assert_eq!(state.spec().inputs[0].label, "Place");
    }

    #[test]
    fn examples_can_be_added_and_edited() {
        let mut state = AppState::default();
        state.add_example(None, None);
        let last = state.spec().examples.len() - 1;
        assert_eq!(state.spec().examples[last], Example::new("Input example", "Expected output"));

        assert!(state.update_example(last, Some("q"), None));
        assert_eq!(state.spec().examples[last], Example::new("q", "Expected output"));
        assert!(!state.update_example(last + 1, Some("q"), None));
        assert_eq!(state.messages().len(), 3 + 2 * state.spec().examples.len());
    }

    #[test]
    fn export_is_pretty_spec_json() {
        let state = AppState::default();
        let json = state.export_spec().unwrap();
        let parsed: TaskSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, state.spec());
        assert!(json.contains("\n  \"role\""));
    }

    #[tokio::test]
    async fn add_document_ignores_empty_name_or_text() {
        let mut state = AppState::default();
        let embedder = DemoEmbedder::instant();
        assert!(!state.add_document(&embedder, "", "text").await.unwrap());
        assert!(!state.add_document(&embedder, "name", "").await.unwrap());
        assert!(state.corpus().is_empty());
        assert!(state.add_document(&embedder, "name", "text").await.unwrap());
        assert_eq!(state.search("text", 5).len(), 1);
    }

    #[tokio::test]
    async fn run_sends_composed_messages() {
        let state = AppState::default();
        let response = state.run(&DemoChatClient::instant()).await.unwrap();
        assert_eq!(response.tokens, 42);
    }
}
