//! Static accessibility knowledge base.
//!
//! Holds the ARIA role taxonomy, the element-to-role schema, the DOM element
//! table and the ARIA property list. The tables ship as embedded JSON
//! documents, are deserialized once at first use, validated, and indexed into
//! process-wide immutable maps. Nothing in here is mutated after load.

use lazy_static::lazy_static;
use log::debug;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

const ROLES_JSON: &str = include_str!("data/roles.json");
const ELEMENT_ROLES_JSON: &str = include_str!("data/element_roles.json");
const DOM_JSON: &str = include_str!("data/dom.json");
const ARIA_JSON: &str = include_str!("data/aria.json");

/// One ARIA role. Abstract roles exist only to organize the taxonomy and are
/// never valid as author-supplied `role` values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RoleDefinition {
    pub name: String,
    #[serde(rename = "abstract")]
    pub abstract_role: bool,
    pub interactive: bool,
    #[serde(default)]
    pub required_props: Vec<String>,
}

/// A literal attribute precondition on an element-role rule. `value: None`
/// means the attribute only has to be present with a statically known value.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributePrecondition {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Maps a (tag, attribute preconditions) pair to the roles the tag carries
/// inherently. Rules for one tag are kept in declaration order; the first
/// fully satisfied rule wins. An empty role list marks a static element with
/// no inherent semantics of its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementRoleRule {
    pub tag: String,
    #[serde(default)]
    pub preconditions: Vec<AttributePrecondition>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// One known DOM element. Reserved elements do not support ARIA roles,
/// states or properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomEntry {
    pub tag: String,
    #[serde(default)]
    pub reserved: bool,
}

/// Knowledge-base load/validation failure. Raised once at startup, never per
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub detail: String,
}

impl SchemaError {
    fn new(detail: impl Into<String>) -> Self {
        SchemaError {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid accessibility schema: {}", self.detail)
    }
}

impl std::error::Error for SchemaError {}

pub struct KnowledgeBase {
    roles: HashMap<String, RoleDefinition>,
    element_rules: HashMap<String, Vec<ElementRoleRule>>,
    dom: HashMap<String, DomEntry>,
    aria_props: HashSet<String>,
}

impl KnowledgeBase {
    fn load() -> Result<Self, SchemaError> {
        let role_list: Vec<RoleDefinition> = serde_json::from_str(ROLES_JSON)
            .map_err(|e| SchemaError::new(format!("roles.json: {}", e)))?;
        let rule_list: Vec<ElementRoleRule> = serde_json::from_str(ELEMENT_ROLES_JSON)
            .map_err(|e| SchemaError::new(format!("element_roles.json: {}", e)))?;
        let dom_list: Vec<DomEntry> = serde_json::from_str(DOM_JSON)
            .map_err(|e| SchemaError::new(format!("dom.json: {}", e)))?;
        let aria_list: Vec<String> = serde_json::from_str(ARIA_JSON)
            .map_err(|e| SchemaError::new(format!("aria.json: {}", e)))?;

        let mut roles = HashMap::with_capacity(role_list.len());
        for role in role_list {
            let key = role.name.to_ascii_lowercase();
            if roles.insert(key, role).is_some() {
                return Err(SchemaError::new("duplicate role name in roles.json"));
            }
        }

        let mut dom = HashMap::with_capacity(dom_list.len());
        for entry in dom_list {
            let key = entry.tag.clone();
            if dom.insert(key, entry).is_some() {
                return Err(SchemaError::new("duplicate tag in dom.json"));
            }
        }

        let mut element_rules: HashMap<String, Vec<ElementRoleRule>> = HashMap::new();
        for rule in rule_list {
            for role_name in &rule.roles {
                match roles.get(&role_name.to_ascii_lowercase()) {
                    Some(def) if !def.abstract_role => {}
                    Some(_) => {
                        return Err(SchemaError::new(format!(
                            "element rule for <{}> implies abstract role '{}'",
                            rule.tag, role_name
                        )));
                    }
                    None => {
                        return Err(SchemaError::new(format!(
                            "element rule for <{}> references unknown role '{}'",
                            rule.tag, role_name
                        )));
                    }
                }
            }
            if !dom.contains_key(&rule.tag) {
                return Err(SchemaError::new(format!(
                    "element rule references unknown tag '{}'",
                    rule.tag
                )));
            }
            element_rules
                .entry(rule.tag.clone())
                .or_default()
                .push(rule);
        }

        let mut aria_props = HashSet::with_capacity(aria_list.len());
        for prop in aria_list {
            if !prop.starts_with("aria-") {
                return Err(SchemaError::new(format!(
                    "aria.json entry '{}' is not aria-prefixed",
                    prop
                )));
            }
            aria_props.insert(prop.to_ascii_lowercase());
        }

        debug!(
            "knowledge base loaded: {} roles, {} element rules, {} dom tags, {} aria props",
            roles.len(),
            element_rules.values().map(Vec::len).sum::<usize>(),
            dom.len(),
            aria_props.len()
        );

        Ok(KnowledgeBase {
            roles,
            element_rules,
            dom,
            aria_props,
        })
    }

    /// Case-insensitive role lookup.
    pub fn role(&self, name: &str) -> Option<&RoleDefinition> {
        self.roles.get(&name.to_ascii_lowercase())
    }

    /// Element-role rules for a tag, in declaration order. Empty for tags the
    /// schema knows nothing about. Exact match: markup capitalization is
    /// semantic, so `<Table>` is a component and never matches `table`.
    pub fn element_rules(&self, tag: &str) -> &[ElementRoleRule] {
        self.element_rules
            .get(tag)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// DOM entry for a tag, matched exactly. `None` marks a custom component
    /// the linter must not make assumptions about; a capitalized or dotted
    /// name never resolves to a DOM element.
    pub fn dom_entry(&self, tag: &str) -> Option<&DomEntry> {
        self.dom.get(tag)
    }

    pub fn is_aria_property(&self, name: &str) -> bool {
        self.aria_props.contains(&name.to_ascii_lowercase())
    }

    /// All role definitions, concrete and abstract.
    pub fn roles(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.values()
    }
}

lazy_static! {
    static ref KNOWLEDGE_BASE: Result<KnowledgeBase, SchemaError> = KnowledgeBase::load();
}

/// The process-wide knowledge base. The first caller pays for load and
/// validation; a malformed table is reported here before any element is
/// classified.
pub fn knowledge_base() -> Result<&'static KnowledgeBase, SchemaError> {
    KNOWLEDGE_BASE.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_validates() {
        let kb = knowledge_base().expect("embedded schema must be valid");
        assert!(kb.role("button").is_some());
        assert!(kb.role("BUTTON").is_some());
        assert!(kb.role("no-such-role").is_none());
    }

    #[test]
    fn abstract_roles_are_flagged() {
        let kb = knowledge_base().unwrap();
        let widget = kb.role("widget").unwrap();
        assert!(widget.abstract_role);
        let button = kb.role("button").unwrap();
        assert!(!button.abstract_role);
        assert!(button.interactive);
    }

    #[test]
    fn element_rules_preserve_declaration_order() {
        let kb = knowledge_base().unwrap();
        let rules = kb.element_rules("input");
        assert!(rules.len() > 1);
        // The unconditional fallback must come after every typed rule.
        let fallback = rules.iter().position(|r| r.preconditions.is_empty());
        assert_eq!(fallback, Some(rules.len() - 1));
    }

    #[test]
    fn reserved_dom_entries() {
        let kb = knowledge_base().unwrap();
        assert!(kb.dom_entry("meta").unwrap().reserved);
        assert!(!kb.dom_entry("div").unwrap().reserved);
        assert!(kb.dom_entry("Route").is_none());
    }

    #[test]
    fn tag_lookup_is_exact() {
        let kb = knowledge_base().unwrap();
        // Capitalized names are components, not DOM elements.
        assert!(kb.dom_entry("Table").is_none());
        assert!(kb.dom_entry("DIV").is_none());
        assert!(kb.element_rules("Input").is_empty());
        assert!(!kb.element_rules("input").is_empty());
    }

    #[test]
    fn aria_property_lookup_is_case_insensitive() {
        let kb = knowledge_base().unwrap();
        assert!(kb.is_aria_property("aria-hidden"));
        assert!(kb.is_aria_property("ARIA-HIDDEN"));
        assert!(!kb.is_aria_property("role"));
    }
}
