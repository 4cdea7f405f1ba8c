//! Rule configuration.
//!
//! Options resolve through one explicit merge: built-in defaults, overlaid
//! by process-wide settings, overlaid by rule-local options. No rule reads
//! ambient global state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Options a single rule accepts. `components` lists custom component names
/// a rule should treat like its built-in tag (e.g. `<Route>` like `<a>`);
/// `special_link` lists extra link-holding props for the href checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleOptions {
    pub components: Option<Vec<String>>,
    pub special_link: Option<Vec<String>>,
}

/// Linter configuration: process-wide settings plus per-rule overrides,
/// keyed by rule name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintConfig {
    pub settings: RuleOptions,
    pub rules: HashMap<String, RuleOptions>,
}

/// Fully resolved options for one rule activation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOptions {
    pub components: Vec<String>,
    pub special_link: Vec<String>,
}

impl ResolvedOptions {
    /// The tag names this rule matches: its built-in tags plus configured
    /// component names. Component names match exactly; built-ins match the
    /// element tag as written.
    pub fn matches_tag(&self, builtin: &[&str], tag: &str) -> bool {
        builtin.iter().any(|t| *t == tag) || self.components.iter().any(|c| c == tag)
    }
}

/// Resolve the options for `rule`. Rule-local options always override
/// process-wide settings, which override the (empty) defaults.
pub fn resolve_options(rule: &str, config: &LintConfig) -> ResolvedOptions {
    let local = config.rules.get(rule);
    ResolvedOptions {
        components: local
            .and_then(|o| o.components.clone())
            .or_else(|| config.settings.components.clone())
            .unwrap_or_default(),
        special_link: local
            .and_then(|o| o.special_link.clone())
            .or_else(|| config.settings.special_link.clone())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let config = LintConfig::default();
        let resolved = resolve_options("anchor-has-content", &config);
        assert!(resolved.components.is_empty());
        assert!(resolved.special_link.is_empty());
    }

    #[test]
    fn settings_seed_every_rule() {
        let config = LintConfig {
            settings: RuleOptions {
                components: Some(vec!["Link".to_string()]),
                special_link: None,
            },
            rules: HashMap::new(),
        };
        let resolved = resolve_options("href-no-hash", &config);
        assert_eq!(resolved.components, vec!["Link".to_string()]);
    }

    #[test]
    fn rule_local_options_override_settings() {
        let mut rules = HashMap::new();
        rules.insert(
            "anchor-has-content".to_string(),
            RuleOptions {
                components: Some(vec!["Route".to_string()]),
                special_link: None,
            },
        );
        let config = LintConfig {
            settings: RuleOptions {
                components: Some(vec!["Link".to_string()]),
                special_link: None,
            },
            rules,
        };

        let local = resolve_options("anchor-has-content", &config);
        assert_eq!(local.components, vec!["Route".to_string()]);

        // Other rules still see the process-wide settings.
        let other = resolve_options("href-no-hash", &config);
        assert_eq!(other.components, vec!["Link".to_string()]);
    }

    #[test]
    fn tag_matching() {
        let resolved = ResolvedOptions {
            components: vec!["Route".to_string()],
            special_link: vec![],
        };
        assert!(resolved.matches_tag(&["a"], "a"));
        assert!(resolved.matches_tag(&["a"], "Route"));
        assert!(!resolved.matches_tag(&["a"], "div"));
    }
}
