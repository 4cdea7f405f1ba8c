//! Links must not point at the `#` placeholder.

use crate::config::{resolve_options, LintConfig};
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;
use crate::props::get_literal_string;

const RULE: &str = "href-no-hash";
const MESSAGE: &str =
    "Links must not point to \"#\". Use a more descriptive href or use a button instead.";

pub fn check(element: &ElementNode, config: &LintConfig) -> Vec<Diagnostic> {
    let options = resolve_options(RULE, config);
    if !options.matches_tag(&["a"], &element.tag) {
        return Vec::new();
    }

    let mut props: Vec<&str> = vec!["href"];
    props.extend(options.special_link.iter().map(String::as_str));

    let mut diagnostics = Vec::new();
    for prop in props {
        if get_literal_string(&element.attributes, prop).map_or(false, |v| v == "#") {
            diagnostics.push(Diagnostic::new(RULE, MESSAGE, element.location));
        }
    }
    diagnostics
}
