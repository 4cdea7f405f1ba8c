//! Lint diagnostics.

use serde::{Deserialize, Serialize};

use crate::node::SourceLocation;

/// One reported violation. The host attaches severity and file identity; the
/// engine only names the rule, the message and where in the source it fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub rule: String,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl Diagnostic {
    pub fn new(rule: &str, message: impl Into<String>, location: SourceLocation) -> Self {
        Diagnostic {
            rule: rule.to_string(),
            message: message.into(),
            line: location.line,
            column: location.column,
        }
    }
}
