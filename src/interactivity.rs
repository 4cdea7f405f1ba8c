//! Interactive / non-interactive element classification.
//!
//! A single `classify` computes the verdict, so the two public predicates
//! can never both hold for one element. `Indeterminate` propagates as
//! "do not flag" in every consuming rule.

use log::trace;

use crate::node::{AttributeNode, LiteralValue};
use crate::props::{get_attribute, get_literal_string, get_literal_value, get_tab_index, has_attribute};
use crate::role::{explicit_role, matched_element_rule};
use crate::schema::{knowledge_base, KnowledgeBase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactivity {
    Interactive,
    NonInteractive,
    /// Cannot be classified either way. Unknown tags, unresolvable roles and
    /// mixed-valence schema entries all land here.
    Indeterminate,
}

/// Classify the element, letting an explicit role override inherent tag
/// semantics.
pub fn classify(tag: &str, attrs: &[AttributeNode]) -> Interactivity {
    let Ok(kb) = knowledge_base() else {
        return Interactivity::Indeterminate;
    };

    // Higher-level components map to unknown DOM elements; make no claim.
    if kb.dom_entry(tag).is_none() {
        return Interactivity::Indeterminate;
    }

    if let Some(attr) = get_attribute(attrs, "role") {
        match get_literal_value(attr) {
            // A role-less role (empty string) is no override at all.
            Some(LiteralValue::Str(s)) if s.trim().is_empty() => {}
            // Any other present role value overrides inherent semantics. A
            // literal that names no concrete taxonomy role (bogus string,
            // boolean shorthand, number) leaves the element unclassifiable,
            // not "role-less".
            Some(_) => {
                let verdict = match explicit_role(attrs) {
                    Some(def) if def.interactive => Interactivity::Interactive,
                    Some(_) => Interactivity::NonInteractive,
                    None => Interactivity::Indeterminate,
                };
                trace!("classify <{}> by explicit role -> {:?}", tag, verdict);
                return verdict;
            }
            // role={expr}: could resolve to anything at runtime.
            None => return Interactivity::Indeterminate,
        }
    }

    inherent(tag, attrs, kb)
}

/// Inherent per-tag classification, ignoring any explicit role. Also the
/// basis for "inherently interactive element assigned a non-interactive
/// role" checks.
pub fn inherent_interactivity(tag: &str, attrs: &[AttributeNode]) -> Interactivity {
    let Ok(kb) = knowledge_base() else {
        return Interactivity::Indeterminate;
    };
    if kb.dom_entry(tag).is_none() {
        return Interactivity::Indeterminate;
    }
    inherent(tag, attrs, kb)
}

// Callers have already confirmed `tag` is a DOM element, so exact lowercase
// names are the only possibility here.
fn inherent(tag: &str, attrs: &[AttributeNode], kb: &'static KnowledgeBase) -> Interactivity {
    match tag {
        // Anchors act as links only when they can receive focus.
        "a" | "area" => {
            let focusable = has_attribute(attrs, "href")
                || get_tab_index(attrs).map_or(false, |index| index >= 0);
            if focusable {
                Interactivity::Interactive
            } else {
                Interactivity::NonInteractive
            }
        }
        "input" => {
            let hidden = get_literal_string(attrs, "type")
                .map_or(false, |t| t.eq_ignore_ascii_case("hidden"));
            if hidden {
                Interactivity::NonInteractive
            } else {
                Interactivity::Interactive
            }
        }
        _ => match matched_element_rule(tag, attrs) {
            // A schema entry with no implied roles marks a static element.
            Some(rule) if rule.roles.is_empty() => Interactivity::NonInteractive,
            Some(rule) => {
                let mut verdicts = rule
                    .roles
                    .iter()
                    .filter_map(|name| kb.role(name))
                    .map(|def| def.interactive);
                let first = match verdicts.next() {
                    Some(v) => v,
                    None => return Interactivity::Indeterminate,
                };
                if verdicts.all(|v| v == first) {
                    if first {
                        Interactivity::Interactive
                    } else {
                        Interactivity::NonInteractive
                    }
                } else {
                    Interactivity::Indeterminate
                }
            }
            None => Interactivity::Indeterminate,
        },
    }
}

/// The element inherently accepts direct user interaction, or its explicit
/// role says so.
pub fn is_interactive_element(tag: &str, attrs: &[AttributeNode]) -> bool {
    classify(tag, attrs) == Interactivity::Interactive
}

/// Dual predicate. False does not imply interactive: an unclassifiable
/// element fails both checks.
pub fn is_non_interactive_element(tag: &str, attrs: &[AttributeNode]) -> bool {
    classify(tag, attrs) == Interactivity::NonInteractive
}
