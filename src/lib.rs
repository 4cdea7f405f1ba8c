//! # JSX Accessibility Lint Engine
//!
//! ## Classification Invariants
//!
//! 1. **Single verdict**: `classify` is the one source of interactivity
//!    truth. `is_interactive_element` and `is_non_interactive_element` are
//!    projections of it and can never both hold for one element.
//!
//! 2. **Indeterminate never flags**: unknown tags, dynamic roles and
//!    mixed-valence schema entries classify as indeterminate, and every
//!    consuming rule treats indeterminate as "do not report".
//!
//! 3. **Explicit role wins**: a literal `role` naming a concrete taxonomy
//!    role overrides the tag's inherent semantics everywhere except
//!    `inherent_interactivity`, which exists precisely to see through the
//!    override.
//!
//! 4. **Literals only**: attribute values bound to runtime expressions never
//!    satisfy a schema precondition, never resolve a role, and never count
//!    as evidence for reporting. Rules err toward silence on dynamic input.
//!
//! 5. **Pure rules**: every rule is a function of one element view plus the
//!    configuration. No rule reads global mutable state, so files can be
//!    linted in parallel.

mod config;
mod diagnostic;
mod interactivity;
mod node;
mod parse;
mod props;
mod role;
mod rules;
mod schema;
mod visibility;


use rayon::prelude::*;
use std::fmt;

pub use config::{resolve_options, LintConfig, ResolvedOptions, RuleOptions};
pub use diagnostic::Diagnostic;
pub use interactivity::{
    classify, inherent_interactivity, is_interactive_element, is_non_interactive_element,
    Interactivity,
};
pub use node::{
    AttrValue, AttributeNode, ChildNode, ElementNode, ExpressionChild, LiteralValue,
    SourceLocation, TextNode,
};
pub use parse::parse_elements;
pub use role::{explicit_role, implicit_role, resolve_role};
pub use rules::{check_element, RuleFn, REGISTRY};
pub use schema::{knowledge_base, KnowledgeBase, RoleDefinition, SchemaError};
pub use visibility::is_hidden_from_screen_reader;

/// Top-level linting failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LintError {
    /// The embedded knowledge base failed validation at load time.
    Schema(SchemaError),
    /// The source did not parse; rules were not run.
    Parse(Vec<String>),
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintError::Schema(err) => write!(f, "knowledge base error: {}", err),
            LintError::Parse(errors) => {
                write!(f, "parse failed: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for LintError {}

impl From<SchemaError> for LintError {
    fn from(err: SchemaError) -> Self {
        LintError::Schema(err)
    }
}

/// Run every registered rule against one already-extracted element.
pub fn lint_element(element: &ElementNode, config: &LintConfig) -> Vec<Diagnostic> {
    rules::check_element(element, config)
}

/// Lint one source file: parse, extract element views, run every rule on
/// every element. Diagnostics come back ordered by source position.
pub fn lint_source(source: &str, config: &LintConfig) -> Result<Vec<Diagnostic>, LintError> {
    knowledge_base()?;
    let elements = parse_elements(source).map_err(LintError::Parse)?;
    let mut diagnostics: Vec<Diagnostic> = elements
        .iter()
        .flat_map(|element| rules::check_element(element, config))
        .collect();
    diagnostics.sort_by_key(|d| (d.line, d.column));
    Ok(diagnostics)
}

/// Lint many sources in parallel. Results come back in input order, one
/// entry per source, each failing or succeeding independently.
pub fn lint_sources(
    sources: &[&str],
    config: &LintConfig,
) -> Vec<Result<Vec<Diagnostic>, LintError>> {
    sources
        .par_iter()
        .map(|source| lint_source(source, config))
        .collect()
}
