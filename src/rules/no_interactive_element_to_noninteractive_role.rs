//! Inherently interactive elements must keep an interactive role.

use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::interactivity::{inherent_interactivity, Interactivity};
use crate::node::ElementNode;
use crate::role::explicit_role;

const RULE: &str = "no-interactive-element-to-noninteractive-role";
const MESSAGE: &str = "Interactive elements should not be assigned non-interactive roles";

pub fn check(element: &ElementNode, _config: &LintConfig) -> Vec<Diagnostic> {
    let Some(role) = explicit_role(&element.attributes) else {
        return Vec::new();
    };
    if role.interactive {
        return Vec::new();
    }
    // The role override is only a demotion when the tag itself, role aside,
    // would be interactive.
    if inherent_interactivity(&element.tag, &element.attributes) != Interactivity::Interactive {
        return Vec::new();
    }
    vec![Diagnostic::new(RULE, MESSAGE, element.location)]
}
