//! Prefer `onBlur` over `onChange` on select controls.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;
use crate::props::has_attribute;

const RULE: &str = "no-onchange";
const MESSAGE: &str = "onBlur must be used instead of onchange, unless absolutely necessary and \
                       it causes no negative consequences for keyboard only or screen reader \
                       users.";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    if element.tag != "select" && element.tag != "option" {
        return Vec::new();
    }
    if !has_attribute(&element.attributes, "onchange") {
        return Vec::new();
    }
    if has_attribute(&element.attributes, "onblur") {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
