//! Owned read views over JSX markup elements.
//!
//! Rules never touch the parser AST directly; `parse` converts each JSX
//! element into this representation. Attribute values carry an explicit
//! kind so "statically known" and "unknown at lint time" stay distinct.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

/// A statically known attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl LiteralValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value the way an author would have written it inline.
    pub fn to_display_string(&self) -> String {
        match self {
            LiteralValue::Str(s) => s.clone(),
            LiteralValue::Num(n) => n.to_string(),
            LiteralValue::Bool(b) => b.to_string(),
        }
    }
}

/// How an attribute's value is bound. Everything that is not statically
/// literal is `Expression` or `Spread` and is handled by conservative policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum AttrValue {
    Literal(LiteralValue),
    /// Attribute written without a value (`<input disabled />`); reads as
    /// `true`.
    BooleanPresence,
    /// Bound to a runtime expression; value unknown at lint time.
    Expression,
    /// A spread (`{...props}`); may inject any attribute.
    Spread,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeNode {
    /// Empty for spread attributes.
    pub name: String,
    pub value: AttrValue,
    #[serde(default)]
    pub location: SourceLocation,
}

impl AttributeNode {
    pub fn is_spread(&self) -> bool {
        matches!(self.value, AttrValue::Spread)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub value: String,
}

/// An expression child (`{foo}`). Only the identifier shape matters to the
/// rules: `{undefined}` is the one expression child that is provably empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionChild {
    #[serde(default)]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChildNode {
    Element(ElementNode),
    Text(TextNode),
    Expression(ExpressionChild),
}

/// One markup element: tag, ordered attributes, converted subtree. The
/// external AST owns the original nodes; this view is plain owned data and
/// is never mutated by any rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub tag: String,
    pub attributes: Vec<AttributeNode>,
    #[serde(default)]
    pub children: Vec<ChildNode>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl ElementNode {
    /// Convenience constructor for callers assembling views by hand.
    pub fn new(tag: impl Into<String>, attributes: Vec<AttributeNode>) -> Self {
        ElementNode {
            tag: tag.into(),
            attributes,
            children: Vec::new(),
            location: SourceLocation::default(),
        }
    }
}
