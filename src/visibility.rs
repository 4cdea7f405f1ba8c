//! Hidden-from-assistive-technology classification.

use crate::node::{AttributeNode, LiteralValue};
use crate::props::{get_attribute, get_literal_string, get_literal_value};

/// Whether the element is excluded from the accessibility tree.
///
/// Policy, in order: a literal `aria-hidden` of `true` (or the boolean
/// shorthand) hides the element; an explicit literal `false` exposes it and
/// ends the check; `<input type="hidden" />` is hidden. A non-literal
/// `aria-hidden` reads as "not hidden" so real violations are not suppressed
/// on unknown runtime state.
pub fn is_hidden_from_screen_reader(tag: &str, attrs: &[AttributeNode]) -> bool {
    if let Some(attr) = get_attribute(attrs, "aria-hidden") {
        match get_literal_value(attr) {
            Some(LiteralValue::Bool(true)) => return true,
            Some(LiteralValue::Bool(false)) => return false,
            Some(LiteralValue::Str(s)) if s.eq_ignore_ascii_case("true") => return true,
            Some(LiteralValue::Str(s)) if s.eq_ignore_ascii_case("false") => return false,
            _ => {}
        }
    }

    // Exact tag: <Input> is a component and hides nothing by itself.
    if tag == "input" {
        if let Some(input_type) = get_literal_string(attrs, "type") {
            return input_type.eq_ignore_ascii_case("hidden");
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{AttrValue, SourceLocation};

    fn attr(name: &str, value: AttrValue) -> AttributeNode {
        AttributeNode {
            name: name.to_string(),
            value,
            location: SourceLocation::default(),
        }
    }

    fn literal(name: &str, value: &str) -> AttributeNode {
        attr(name, AttrValue::Literal(LiteralValue::Str(value.to_string())))
    }

    #[test]
    fn aria_hidden_true_hides() {
        assert!(is_hidden_from_screen_reader("div", &[literal("aria-hidden", "true")]));
        assert!(is_hidden_from_screen_reader(
            "div",
            &[attr("aria-hidden", AttrValue::Literal(LiteralValue::Bool(true)))]
        ));
        assert!(is_hidden_from_screen_reader(
            "div",
            &[attr("aria-hidden", AttrValue::BooleanPresence)]
        ));
    }

    #[test]
    fn explicit_false_always_exposes() {
        // Even an input type="hidden" stays visible once aria-hidden is an
        // explicit literal false.
        let attrs = vec![literal("aria-hidden", "false"), literal("type", "hidden")];
        assert!(!is_hidden_from_screen_reader("input", &attrs));
    }

    #[test]
    fn hidden_input() {
        assert!(is_hidden_from_screen_reader("input", &[literal("type", "hidden")]));
        assert!(is_hidden_from_screen_reader("input", &[literal("type", "HIDDEN")]));
        assert!(!is_hidden_from_screen_reader("input", &[literal("type", "text")]));
        // Only inputs hide via type; components and other tags do not.
        assert!(!is_hidden_from_screen_reader("div", &[literal("type", "hidden")]));
        assert!(!is_hidden_from_screen_reader("Input", &[literal("type", "hidden")]));
    }

    #[test]
    fn non_literal_aria_hidden_is_not_hidden() {
        let attrs = vec![attr("aria-hidden", AttrValue::Expression)];
        assert!(!is_hidden_from_screen_reader("div", &attrs));
    }
}
