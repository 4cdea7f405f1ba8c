//! JSX parsing and element extraction.
//!
//! Parses source text with oxc and converts every JSX element into an owned
//! `ElementNode` view. Each element is collected independently (nested
//! elements are visited in their own right) and carries its converted
//! subtree so content rules can inspect children without touching the AST.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Expression, JSXAttributeItem, JSXAttributeName, JSXAttributeValue, JSXChild, JSXElement,
    JSXElementName, JSXExpression, JSXMemberExpression, JSXMemberExpressionObject, UnaryOperator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::node::{
    AttrValue, AttributeNode, ChildNode, ElementNode, ExpressionChild, LiteralValue,
    SourceLocation, TextNode,
};

/// Parse JSX source and extract one view per JSX element, outermost first.
pub fn parse_elements(source: &str) -> Result<Vec<ElementNode>, Vec<String>> {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_jsx(true).with_typescript(true);
    let parser = Parser::new(&allocator, source, source_type);
    let ret = parser.parse();

    if !ret.errors.is_empty() {
        return Err(ret.errors.iter().map(|e| e.to_string()).collect());
    }

    let mut collector = ElementCollector {
        source,
        elements: Vec::new(),
    };
    collector.visit_program(&ret.program);
    Ok(collector.elements)
}

struct ElementCollector<'s> {
    source: &'s str,
    elements: Vec<ElementNode>,
}

impl<'a> Visit<'a> for ElementCollector<'_> {
    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        self.elements.push(convert_element(element, self.source));
        walk::walk_jsx_element(self, element);
    }
}

fn convert_element(element: &JSXElement<'_>, source: &str) -> ElementNode {
    let opening = &element.opening_element;

    let mut attributes = Vec::with_capacity(opening.attributes.len());
    for item in &opening.attributes {
        match item {
            JSXAttributeItem::Attribute(attr) => {
                let name = attribute_name(&attr.name);
                let value = match &attr.value {
                    None => AttrValue::BooleanPresence,
                    Some(JSXAttributeValue::StringLiteral(s)) => {
                        AttrValue::Literal(LiteralValue::Str(s.value.to_string()))
                    }
                    Some(JSXAttributeValue::ExpressionContainer(container)) => {
                        classify_expression(&container.expression)
                    }
                    // Element- or fragment-valued attributes are runtime
                    // values as far as the rules are concerned.
                    Some(JSXAttributeValue::Element(_)) | Some(JSXAttributeValue::Fragment(_)) => {
                        AttrValue::Expression
                    }
                };
                attributes.push(AttributeNode {
                    name,
                    value,
                    location: line_col(source, attr.span.start),
                });
            }
            JSXAttributeItem::SpreadAttribute(spread) => {
                attributes.push(AttributeNode {
                    name: String::new(),
                    value: AttrValue::Spread,
                    location: line_col(source, spread.span.start),
                });
            }
        }
    }

    let mut children = Vec::new();
    for child in &element.children {
        match child {
            JSXChild::Text(text) => {
                children.push(ChildNode::Text(TextNode {
                    value: text.value.to_string(),
                }));
            }
            JSXChild::Element(el) => {
                children.push(ChildNode::Element(convert_element(el, source)));
            }
            JSXChild::ExpressionContainer(container) => {
                let identifier = match container.expression.as_expression() {
                    Some(Expression::Identifier(id)) => Some(id.name.to_string()),
                    _ => None,
                };
                children.push(ChildNode::Expression(ExpressionChild { identifier }));
            }
            // Fragments and child spreads hold arbitrary runtime content.
            JSXChild::Fragment(_) | JSXChild::Spread(_) => {
                children.push(ChildNode::Expression(ExpressionChild { identifier: None }));
            }
        }
    }

    ElementNode {
        tag: tag_name(&opening.name),
        attributes,
        children,
        location: line_col(source, opening.span.start),
    }
}

fn attribute_name(name: &JSXAttributeName<'_>) -> String {
    match name {
        JSXAttributeName::Identifier(id) => id.name.to_string(),
        JSXAttributeName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
    }
}

fn tag_name(name: &JSXElementName<'_>) -> String {
    match name {
        JSXElementName::Identifier(id) => id.name.to_string(),
        JSXElementName::IdentifierReference(id) => id.name.to_string(),
        JSXElementName::NamespacedName(ns) => format!("{}:{}", ns.namespace.name, ns.name.name),
        JSXElementName::MemberExpression(me) => member_name(me),
        JSXElementName::ThisExpression(_) => "this".to_string(),
    }
}

fn member_name(me: &JSXMemberExpression<'_>) -> String {
    let object = match &me.object {
        JSXMemberExpressionObject::IdentifierReference(id) => id.name.to_string(),
        JSXMemberExpressionObject::MemberExpression(inner) => member_name(inner),
        JSXMemberExpressionObject::ThisExpression(_) => "this".to_string(),
    };
    format!("{}.{}", object, me.property.name)
}

/// Classify a `{...}` attribute value: plain literals (plus negated numbers
/// and interpolation-free template strings) are statically known, anything
/// else is a runtime expression.
fn classify_expression(jsx_expr: &JSXExpression<'_>) -> AttrValue {
    let Some(expr) = jsx_expr.as_expression() else {
        return AttrValue::Expression;
    };
    match expr {
        Expression::StringLiteral(s) => AttrValue::Literal(LiteralValue::Str(s.value.to_string())),
        Expression::NumericLiteral(n) => AttrValue::Literal(LiteralValue::Num(n.value)),
        Expression::BooleanLiteral(b) => AttrValue::Literal(LiteralValue::Bool(b.value)),
        Expression::TemplateLiteral(template)
            if template.expressions.is_empty() && template.quasis.len() == 1 =>
        {
            let quasi = &template.quasis[0];
            let text = quasi
                .value
                .cooked
                .as_ref()
                .map(|atom| atom.to_string())
                .unwrap_or_else(|| quasi.value.raw.to_string());
            AttrValue::Literal(LiteralValue::Str(text))
        }
        Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::UnaryNegation => {
            match &unary.argument {
                Expression::NumericLiteral(n) => AttrValue::Literal(LiteralValue::Num(-n.value)),
                _ => AttrValue::Expression,
            }
        }
        _ => AttrValue::Expression,
    }
}

/// 1-based line/column for a byte offset. Columns count characters, not
/// bytes, so multibyte text earlier on the line does not shift them.
fn line_col(source: &str, offset: u32) -> SourceLocation {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let line = before.bytes().filter(|b| *b == b'\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map_or(0, |newline| newline + 1);
    let column = before[line_start..].chars().count() as u32 + 1;
    SourceLocation { line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(source: &str) -> ElementNode {
        parse_elements(source)
            .expect("fixture must parse")
            .into_iter()
            .next()
            .expect("fixture must contain an element")
    }

    #[test]
    fn collects_nested_elements_independently() {
        let elements = parse_elements("<div><a href=\"/x\">Home</a></div>").unwrap();
        let tags: Vec<&str> = elements.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["div", "a"]);
        // The outer view still carries the converted subtree.
        assert!(matches!(elements[0].children[0], ChildNode::Element(_)));
    }

    #[test]
    fn attribute_value_kinds() {
        let el =
            first("<input type=\"checkbox\" disabled checked={true} value={dynamic} {...rest} />");
        assert_eq!(
            el.attributes[0].value,
            AttrValue::Literal(LiteralValue::Str("checkbox".to_string()))
        );
        assert_eq!(el.attributes[1].value, AttrValue::BooleanPresence);
        assert_eq!(
            el.attributes[2].value,
            AttrValue::Literal(LiteralValue::Bool(true))
        );
        assert_eq!(el.attributes[3].value, AttrValue::Expression);
        assert_eq!(el.attributes[4].value, AttrValue::Spread);
        assert_eq!(el.attributes[4].name, "");
    }

    #[test]
    fn numeric_and_negative_literals() {
        let el = first("<div tabIndex={0} data-depth={-1} />");
        assert_eq!(
            el.attributes[0].value,
            AttrValue::Literal(LiteralValue::Num(0.0))
        );
        assert_eq!(
            el.attributes[1].value,
            AttrValue::Literal(LiteralValue::Num(-1.0))
        );
    }

    #[test]
    fn component_and_member_tags() {
        assert_eq!(first("<Route />").tag, "Route");
        assert_eq!(first("<UI.Button />").tag, "UI.Button");
        assert_eq!(first("<this.Link />").tag, "this.Link");
    }

    #[test]
    fn undefined_identifier_child_is_tracked() {
        let el = first("<a>{undefined}</a>");
        match &el.children[0] {
            ChildNode::Expression(expr) => {
                assert_eq!(expr.identifier.as_deref(), Some("undefined"));
            }
            other => panic!("expected expression child, got {:?}", other),
        }
    }

    #[test]
    fn locations_point_at_the_opening_element() {
        let elements = parse_elements("<div>\n  <a />\n</div>").unwrap();
        assert_eq!(elements[0].location, SourceLocation { line: 1, column: 1 });
        assert_eq!(elements[1].location, SourceLocation { line: 2, column: 3 });
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        // "é" is two bytes but one column.
        let elements = parse_elements("<div>é<a /></div>").unwrap();
        assert_eq!(elements[1].location, SourceLocation { line: 1, column: 7 });

        let elements = parse_elements("<p>\n  über <a />\n</p>").unwrap();
        assert_eq!(elements[1].location, SourceLocation { line: 2, column: 8 });
    }

    #[test]
    fn parse_errors_are_surfaced() {
        assert!(parse_elements("<div <<<").is_err());
    }
}
