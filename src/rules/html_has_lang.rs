//! `<html>` must declare the page language.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;
use crate::props::has_truthy_attribute;

const RULE: &str = "html-has-lang";
const MESSAGE: &str = "<html> elements must have the lang prop.";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    if element.tag != "html" {
        return Vec::new();
    }
    if has_truthy_attribute(&element.attributes, "lang") {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
