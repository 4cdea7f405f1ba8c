//! Anchors must render content a screen reader can perceive.

use crate::config::{resolve_options, LintConfig};
use crate::diagnostic::Diagnostic;
use crate::node::{ChildNode, ElementNode};
use crate::props::has_any_of;
use crate::visibility::is_hidden_from_screen_reader;

const RULE: &str = "anchor-has-content";
const MESSAGE: &str =
    "Anchors must have content and the content must be accessible by a screen reader.";

fn has_accessible_content(element: &ElementNode) -> bool {
    let from_children = element.children.iter().any(|child| match child {
        ChildNode::Text(text) => !text.value.trim().is_empty(),
        ChildNode::Element(el) => !is_hidden_from_screen_reader(&el.tag, &el.attributes),
        // A bare `{undefined}` renders nothing; any other expression is
        // assumed to produce content.
        ChildNode::Expression(expr) => expr.identifier.as_deref() != Some("undefined"),
    });
    from_children || has_any_of(&element.attributes, &["dangerouslySetInnerHTML", "children"])
}

pub fn check(element: &ElementNode, config: &LintConfig) -> Vec<Diagnostic> {
    let options = resolve_options(RULE, config);
    if !options.matches_tag(&["a"], &element.tag) {
        return Vec::new();
    }
    if has_accessible_content(element) {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
