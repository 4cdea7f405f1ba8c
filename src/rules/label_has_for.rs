//! Labels must be programmatically associated with their control.

use crate::config::{resolve_options, LintConfig};
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;
use crate::props::has_truthy_attribute;

const RULE: &str = "label-has-for";
const MESSAGE: &str = "Form controls using a label to identify them must be programmatically \
                       associated with the control using htmlFor";

pub fn check(element: &ElementNode, config: &LintConfig) -> Vec<Diagnostic> {
    let options = resolve_options(RULE, config);
    if !options.matches_tag(&["label"], &element.tag) {
        return Vec::new();
    }
    if has_truthy_attribute(&element.attributes, "htmlFor") {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
