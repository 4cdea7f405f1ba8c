//! Clickable non-interactive elements need a keyboard listener too.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::interactivity::is_non_interactive_element;
use crate::node::ElementNode;
use crate::props::{get_attribute, has_any_of};
use crate::visibility::is_hidden_from_screen_reader;

const RULE: &str = "click-events-have-key-events";
const MESSAGE: &str =
    "Visible, non-interactive elements with click handlers must have at least one keyboard listener.";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    if get_attribute(&element.attributes, "onclick").is_none() {
        return Vec::new();
    }
    if is_hidden_from_screen_reader(&element.tag, &element.attributes) {
        return Vec::new();
    }
    // Interactive and unclassifiable elements are out of scope.
    if !is_non_interactive_element(&element.tag, &element.attributes) {
        return Vec::new();
    }
    if has_any_of(&element.attributes, &["onkeydown", "onkeyup", "onkeypress"]) {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
