//! Clickable non-interactive elements must declare what they are.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::interactivity::is_non_interactive_element;
use crate::node::ElementNode;
use crate::props::{get_attribute, has_truthy_attribute};
use crate::visibility::is_hidden_from_screen_reader;

const RULE: &str = "onclick-has-role";
const MESSAGE: &str =
    "Visible, non-interactive elements with click handlers must have role attribute.";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    if get_attribute(&element.attributes, "onclick").is_none() {
        return Vec::new();
    }
    if is_hidden_from_screen_reader(&element.tag, &element.attributes) {
        return Vec::new();
    }
    if !is_non_interactive_element(&element.tag, &element.attributes) {
        return Vec::new();
    }
    if has_truthy_attribute(&element.attributes, "role") {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
