//! The `role` attribute must name valid, concrete ARIA roles.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;
use crate::props::get_literal_value;
use crate::schema::knowledge_base;

const RULE: &str = "aria-role";
const MESSAGE: &str = "Elements with ARIA roles must use a valid, non-abstract ARIA role.";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    let Ok(kb) = knowledge_base() else {
        return Vec::new();
    };

    let mut diagnostics = Vec::new();
    for attr in &element.attributes {
        if !attr.name.eq_ignore_ascii_case("role") {
            continue;
        }
        // Dynamic roles cannot be validated statically.
        let Some(value) = get_literal_value(attr) else {
            continue;
        };
        // Boolean and numeric literals stringify, so `role` with no value
        // validates "true" and fails.
        let text = value.to_display_string();
        let all_valid = text
            .split_whitespace()
            .all(|token| kb.role(token).map_or(false, |def| !def.abstract_role));
        if !all_valid {
            diagnostics.push(Diagnostic::new(RULE, MESSAGE, attr.location));
        }
    }
    diagnostics
}
