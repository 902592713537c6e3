//! Namespaced keys under which application state is persisted.

/// Persona description.
pub const SPEC_ROLE: &str = "spec.role";
/// One-sentence objective.
pub const SPEC_GOAL: &str = "spec.goal";
/// Target audience.
pub const SPEC_AUDIENCE: &str = "spec.audience";
/// Guardrail list.
pub const SPEC_CONSTRAINTS: &str = "spec.constraints";
/// Labelled inputs.
pub const SPEC_INPUTS: &str = "spec.inputs";
/// Few-shot examples.
pub const SPEC_EXAMPLES: &str = "spec.examples";
/// Acceptance criteria.
pub const SPEC_ACCEPTANCE: &str = "spec.acceptance";
/// Style adjectives.
pub const SPEC_STYLE: &str = "spec.style";
/// Citation requirement flag.
pub const SPEC_CITATIONS: &str = "spec.citations";
/// Formality option.
pub const SPEC_FORMALITY: &str = "spec.formality";
/// Length option.
pub const SPEC_LENGTH: &str = "spec.length";
/// Active tab.
pub const TAB: &str = "appkit.tab";
/// Active persona.
pub const PERSONA: &str = "appkit.persona";
/// Retrieval corpus.
pub const DOCS: &str = "wp.appkit.docs";

/// Every key belonging to the task spec.
pub const SPEC_KEYS: [&str; 11] = [
    SPEC_ROLE,
    SPEC_GOAL,
    SPEC_AUDIENCE,
    SPEC_CONSTRAINTS,
    SPEC_INPUTS,
    SPEC_EXAMPLES,
    SPEC_ACCEPTANCE,
    SPEC_STYLE,
    SPEC_CITATIONS,
    SPEC_FORMALITY,
    SPEC_LENGTH,
];
