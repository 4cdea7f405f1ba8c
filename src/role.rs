//! Effective ARIA role resolution.
//!
//! An element's effective role is its explicit literal `role` attribute when
//! that names a concrete taxonomy role, otherwise the implicit role the
//! element-role schema assigns to the tag under its current attributes.
//! `None` means indeterminate: consumers must not assume either valence.

use log::trace;

use crate::node::{AttributeNode, LiteralValue};
use crate::props::{get_attribute, get_literal_value};
use crate::schema::{knowledge_base, AttributePrecondition, ElementRoleRule, RoleDefinition};

/// Resolve the explicit `role` attribute, if it is a literal naming at least
/// one concrete role. An author may list several candidates separated by
/// whitespace; the first valid, non-abstract one wins.
pub fn explicit_role(attrs: &[AttributeNode]) -> Option<&'static RoleDefinition> {
    let kb = knowledge_base().ok()?;
    let attr = get_attribute(attrs, "role")?;
    let value = match get_literal_value(attr)? {
        LiteralValue::Str(s) => s,
        _ => return None,
    };
    value
        .split_whitespace()
        .filter_map(|candidate| kb.role(candidate))
        .find(|def| !def.abstract_role)
}

fn precondition_met(precondition: &AttributePrecondition, attrs: &[AttributeNode]) -> bool {
    let Some(attr) = get_attribute(attrs, &precondition.name) else {
        return false;
    };
    // An attribute bound to a runtime expression never satisfies a
    // precondition.
    let Some(value) = get_literal_value(attr) else {
        return false;
    };
    match &precondition.value {
        None => true,
        Some(expected) => value.as_str() == Some(expected.as_str()),
    }
}

/// The first element-role rule for `tag` whose attribute preconditions are
/// all satisfied by literal attribute values, in declaration order.
pub fn matched_element_rule(
    tag: &str,
    attrs: &[AttributeNode],
) -> Option<&'static ElementRoleRule> {
    let kb = knowledge_base().ok()?;
    kb.element_rules(tag)
        .iter()
        .find(|rule| rule.preconditions.iter().all(|p| precondition_met(p, attrs)))
}

/// The implicit role the tag carries inherently under its current
/// attributes. Tags mapping to no role, or to several, resolve to `None`.
pub fn implicit_role(tag: &str, attrs: &[AttributeNode]) -> Option<&'static RoleDefinition> {
    let rule = matched_element_rule(tag, attrs)?;
    if rule.roles.len() != 1 {
        return None;
    }
    knowledge_base().ok()?.role(&rule.roles[0])
}

/// Effective role: explicit override first, implicit default second.
pub fn resolve_role(tag: &str, attrs: &[AttributeNode]) -> Option<&'static RoleDefinition> {
    let resolved = explicit_role(attrs).or_else(|| implicit_role(tag, attrs));
    trace!(
        "resolve_role <{}> -> {:?}",
        tag,
        resolved.map(|def| def.name.as_str())
    );
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{AttrValue, SourceLocation};

    fn attr(name: &str, value: AttrValue) -> AttributeNode {
        AttributeNode {
            name: name.to_string(),
            value,
            location: SourceLocation::default(),
        }
    }

    fn literal(name: &str, value: &str) -> AttributeNode {
        attr(name, AttrValue::Literal(LiteralValue::Str(value.to_string())))
    }

    #[test]
    fn explicit_role_picks_first_concrete_candidate() {
        let attrs = vec![literal("role", "widget button")];
        let role = explicit_role(&attrs).unwrap();
        assert_eq!(role.name, "button");
    }

    #[test]
    fn abstract_only_role_does_not_resolve() {
        let attrs = vec![literal("role", "structure")];
        assert!(explicit_role(&attrs).is_none());
    }

    #[test]
    fn expression_role_does_not_resolve() {
        let attrs = vec![attr("role", AttrValue::Expression)];
        assert!(explicit_role(&attrs).is_none());
    }

    #[test]
    fn implicit_role_respects_preconditions() {
        let checkbox = vec![literal("type", "checkbox")];
        assert_eq!(implicit_role("input", &checkbox).unwrap().name, "checkbox");

        // Fallback rule: a bare input is a textbox.
        assert_eq!(implicit_role("input", &[]).unwrap().name, "textbox");

        // Expression-bound type never satisfies the typed preconditions, so
        // the unconditional fallback applies.
        let dynamic = vec![attr("type", AttrValue::Expression)];
        assert_eq!(implicit_role("input", &dynamic).unwrap().name, "textbox");
    }

    #[test]
    fn presence_precondition_requires_a_literal() {
        let linked = vec![literal("href", "/home")];
        assert_eq!(implicit_role("a", &linked).unwrap().name, "link");

        assert!(implicit_role("a", &[]).is_none());

        let dynamic = vec![attr("href", AttrValue::Expression)];
        assert!(implicit_role("a", &dynamic).is_none());
    }

    #[test]
    fn static_elements_resolve_to_nothing() {
        assert!(resolve_role("div", &[]).is_none());
        assert!(resolve_role("FancyWidget", &[]).is_none());
    }

    #[test]
    fn explicit_beats_implicit() {
        let attrs = vec![literal("role", "img"), literal("type", "checkbox")];
        assert_eq!(resolve_role("input", &attrs).unwrap().name, "img");
    }
}
