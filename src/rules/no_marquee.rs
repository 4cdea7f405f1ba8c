//! `<marquee>` is deprecated and inaccessible.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;

const RULE: &str = "no-marquee";
const MESSAGE: &str =
    "Do not use <marquee> elements as they create accessibility issues and are deprecated.";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    if element.tag != "marquee" {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
