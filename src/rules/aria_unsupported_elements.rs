//! Reserved DOM elements do not support ARIA roles, states or properties.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;
use crate::schema::knowledge_base;

const RULE: &str = "aria-unsupported-elements";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    let Ok(kb) = knowledge_base() else {
        return Vec::new();
    };
    let reserved = kb
        .dom_entry(&element.tag)
        .map_or(false, |entry| entry.reserved);
    if !reserved {
        return Vec::new();
    }

    let mut diagnostics = Vec::new();
    for attr in &element.attributes {
        if attr.is_spread() {
            continue;
        }
        let lower = attr.name.to_ascii_lowercase();
        if kb.is_aria_property(&lower) || lower == "role" {
            diagnostics.push(Diagnostic::new(
                RULE,
                format!(
                    "This element does not support ARIA roles, states and properties. \
                     Try removing the prop '{}'.",
                    attr.name
                ),
                attr.location,
            ));
        }
    }
    diagnostics
}
