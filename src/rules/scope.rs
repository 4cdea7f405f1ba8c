//! `scope` belongs on `<th>` elements only.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;
use crate::schema::knowledge_base;

const RULE: &str = "scope";
const MESSAGE: &str = "The scope prop can only be used on <th> elements.";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    let Ok(kb) = knowledge_base() else {
        return Vec::new();
    };
    // Custom components may give `scope` any meaning they like.
    if kb.dom_entry(&element.tag).is_none() {
        return Vec::new();
    }
    if element.tag == "th" {
        return Vec::new();
    }

    element
        .attributes
        .iter()
        .filter(|attr| attr.name.eq_ignore_ascii_case("scope"))
        .map(|attr| Diagnostic::new(RULE, MESSAGE, attr.location))
        .collect()
}
