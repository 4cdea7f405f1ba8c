//! Static elements should not carry mouse or keyboard listeners.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::interactivity::is_non_interactive_element;
use crate::node::ElementNode;
use crate::props::has_any_of;
use crate::visibility::is_hidden_from_screen_reader;

const RULE: &str = "no-static-element-interactions";
const MESSAGE: &str =
    "Visible, non-interactive elements should not have mouse or keyboard event listeners";

const HANDLERS: &[&str] = &["onclick", "ondblclick", "onkeydown", "onkeyup", "onkeypress"];

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    if !has_any_of(&element.attributes, HANDLERS) {
        return Vec::new();
    }
    if is_hidden_from_screen_reader(&element.tag, &element.attributes) {
        return Vec::new();
    }
    if !is_non_interactive_element(&element.tag, &element.attributes) {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
