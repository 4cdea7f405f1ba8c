//! Uniform read access over an element's attribute list.
//!
//! All lookups are case-insensitive on the attribute name. Spread attributes
//! never match a concrete name: a spread can inject anything, so its presence
//! alone must not count as "has". Absence always resolves to `None`; nothing
//! in this module errors.

use crate::node::{AttrValue, AttributeNode, LiteralValue};

/// First attribute matching `name`, case-insensitively. Duplicate names are
/// an author error; first match wins.
pub fn get_attribute<'a>(attrs: &'a [AttributeNode], name: &str) -> Option<&'a AttributeNode> {
    attrs
        .iter()
        .find(|attr| !attr.is_spread() && attr.name.eq_ignore_ascii_case(name))
}

/// Statically known value of an attribute, if any. Boolean-shorthand
/// attributes read as `true`; expressions and spreads read as unknown.
pub fn get_literal_value(attr: &AttributeNode) -> Option<LiteralValue> {
    match &attr.value {
        AttrValue::Literal(value) => Some(value.clone()),
        AttrValue::BooleanPresence => Some(LiteralValue::Bool(true)),
        AttrValue::Expression | AttrValue::Spread => None,
    }
}

/// Literal string value of a named attribute.
pub fn get_literal_string(attrs: &[AttributeNode], name: &str) -> Option<String> {
    match get_attribute(attrs, name).and_then(get_literal_value)? {
        LiteralValue::Str(s) => Some(s),
        _ => None,
    }
}

/// Whether the attribute is present at all (with any value kind except
/// spread).
pub fn has_attribute(attrs: &[AttributeNode], name: &str) -> bool {
    get_attribute(attrs, name).is_some()
}

/// True iff any attribute matches any of `names`, case-insensitively,
/// excluding spreads. Conservative: may under-detect, never over-detects a
/// concrete name.
pub fn has_any_of(attrs: &[AttributeNode], names: &[&str]) -> bool {
    attrs.iter().any(|attr| {
        !attr.is_spread() && names.iter().any(|name| attr.name.eq_ignore_ascii_case(name))
    })
}

/// Whether an attribute value is "truthy" for presence-style checks. Unknown
/// (expression-bound) values are assumed present rather than absent.
pub fn has_truthy_value(attr: &AttributeNode) -> bool {
    match &attr.value {
        AttrValue::Literal(LiteralValue::Str(s)) => !s.is_empty(),
        AttrValue::Literal(LiteralValue::Bool(b)) => *b,
        AttrValue::Literal(LiteralValue::Num(n)) => *n != 0.0,
        AttrValue::BooleanPresence => true,
        AttrValue::Expression => true,
        AttrValue::Spread => false,
    }
}

/// Named-attribute form of [`has_truthy_value`]. Absent attributes are
/// falsy.
pub fn has_truthy_attribute(attrs: &[AttributeNode], name: &str) -> bool {
    get_attribute(attrs, name).map_or(false, has_truthy_value)
}

/// Parse a literal value as an integer tab index. Numeric literals must be
/// integral; string literals must parse as an integer. Anything else is not
/// statically evaluable.
pub fn parse_tab_index(value: &LiteralValue) -> Option<i64> {
    match value {
        LiteralValue::Num(n) if n.fract() == 0.0 => Some(*n as i64),
        LiteralValue::Str(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// The element's literal `tabIndex`, when statically determinable.
pub fn get_tab_index(attrs: &[AttributeNode]) -> Option<i64> {
    let attr = get_attribute(attrs, "tabIndex")?;
    parse_tab_index(&get_literal_value(attr)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SourceLocation;

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
    fn lookup_is_case_insensitive_first_match_wins() {
        let attrs = vec![literal("onClick", "a"), literal("onclick", "b")];
        let found = get_attribute(&attrs, "ONCLICK").unwrap();
        assert_eq!(found.name, "onClick");
    }

    #[test]
    fn spread_never_matches_a_name() {
        let attrs = vec![attr("", AttrValue::Spread)];
        assert!(get_attribute(&attrs, "href").is_none());
        assert!(!has_any_of(&attrs, &["href", "onclick"]));
    }

    #[test]
    fn boolean_presence_reads_as_true() {
        let a = attr("disabled", AttrValue::BooleanPresence);
        assert_eq!(get_literal_value(&a), Some(LiteralValue::Bool(true)));
    }

    #[test]
    fn expression_value_is_unknown() {
        let a = attr("href", AttrValue::Expression);
        assert_eq!(get_literal_value(&a), None);
        assert!(has_truthy_value(&a));
    }

    #[test]
    fn tab_index_parsing() {
        let attrs = vec![literal("tabIndex", "0")];
        assert_eq!(get_tab_index(&attrs), Some(0));

        let attrs = vec![literal("tabindex", "-1")];
        assert_eq!(get_tab_index(&attrs), Some(-1));

        let attrs = vec![attr("tabIndex", AttrValue::Literal(LiteralValue::Num(5.0)))];
        assert_eq!(get_tab_index(&attrs), Some(5));

        let attrs = vec![literal("tabIndex", "bogus")];
        assert_eq!(get_tab_index(&attrs), None);

        let attrs = vec![attr("tabIndex", AttrValue::Expression)];
        assert_eq!(get_tab_index(&attrs), None);
    }
}
