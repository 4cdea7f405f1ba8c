//! `accessKey` shortcuts collide with assistive-technology key bindings.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::node::ElementNode;
use crate::props::has_truthy_attribute;

const RULE: &str = "no-access-key";
const MESSAGE: &str = "No access key attribute allowed. Inconsistencies between keyboard \
                       shortcuts and keyboard comments used by screenreader and keyboard \
                       only users create a11y complications.";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    if !has_truthy_attribute(&element.attributes, "accesskey") {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
