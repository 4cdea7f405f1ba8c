//! Lint rule registry.
//!
//! Each rule is a pure function from an element view and the linter
//! configuration to zero or more diagnostics. Rules never consult ambient
//! state and never see the raw AST; everything they need is on the
//! `ElementNode` or in the knowledge base.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;

mod anchor_has_content;
mod aria_role;
mod aria_unsupported_elements;
mod click_events_have_key_events;
mod href_no_hash;
mod html_has_lang;
mod label_has_for;
mod no_access_key;
mod no_interactive_element_to_noninteractive_role;
mod no_marquee;
mod no_onchange;
mod no_static_element_interactions;
mod onclick_has_role;
mod scope;
mod tabindex_no_positive;

pub type RuleFn = fn(&ElementNode, &LintConfig) -> Vec<Diagnostic>;

/// Every rule the engine ships, keyed by its public name.
pub const REGISTRY: &[(&str, RuleFn)] = &[
    ("anchor-has-content", anchor_has_content::check),
    ("aria-role", aria_role::check),
    ("aria-unsupported-elements", aria_unsupported_elements::check),
    (
        "click-events-have-key-events",
        click_events_have_key_events::check,
    ),
    ("href-no-hash", href_no_hash::check),
    ("html-has-lang", html_has_lang::check),
    ("label-has-for", label_has_for::check),
    ("no-access-key", no_access_key::check),
    (
        "no-interactive-element-to-noninteractive-role",
        no_interactive_element_to_noninteractive_role::check,
    ),
    ("no-marquee", no_marquee::check),
    ("no-onchange", no_onchange::check),
    (
        "no-static-element-interactions",
        no_static_element_interactions::check,
    ),
    ("onclick-has-role", onclick_has_role::check),
    ("scope", scope::check),
    ("tabindex-no-positive", tabindex_no_positive::check),
];

/// Run every registered rule against one element.
pub fn check_element(element: &ElementNode, config: &LintConfig) -> Vec<Diagnostic> {
    REGISTRY
        .iter()
        .flat_map(|(_, rule)| rule(element, config))
        .collect()
}
