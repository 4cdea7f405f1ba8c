//! Positive tabIndex values disrupt the natural tab order.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::node::{ElementNode, LiteralValue};
use crate::props::get_literal_value;

const RULE: &str = "tabindex-no-positive";
const MESSAGE: &str = "Avoid positive integer values for tabIndex.";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for attr in &element.attributes {
        if !attr.name.eq_ignore_ascii_case("tabindex") {
            continue;
        }
        let Some(value) = get_literal_value(attr) else {
            continue;
        };
        let number = match value {
            LiteralValue::Num(n) => Some(n),
            LiteralValue::Str(s) => s.trim().parse::<f64>().ok(),
            LiteralValue::Bool(_) => None,
        };
        if number.map_or(false, |n| n > 0.0) {
            diagnostics.push(Diagnostic::new(RULE, MESSAGE, attr.location));
        }
    }
    diagnostics
}
