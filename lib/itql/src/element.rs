use crate::syntax::{ElementNode, LiteralNode, Strand};
use crate::{AliasMap, ItqlError, ItqlResult};
use mulgara_model::{ConstraintElement, LiteralValue, Variable};

/// Converts a parsed element into a constraint element, expanding aliases in resources.
pub fn to_constraint_element(
    element: &ElementNode,
    aliases: &AliasMap,
) -> ItqlResult<ConstraintElement> {
    Ok(match element {
        ElementNode::Variable(name) => to_variable(name)?.into(),
        ElementNode::Resource(token) => aliases.resolve(token)?.into(),
        ElementNode::Literal(literal) => to_literal(literal, aliases)?.into(),
    })
}

pub(crate) fn to_variable(name: &str) -> ItqlResult<Variable> {
    Variable::new(name)
        .map_err(|error| ItqlError::internal(format!("invalid variable name ${name}: {error}")))
}

/// Converts a parsed literal. Literals without a datatype are untyped, see [LiteralValue].
pub fn to_literal(literal: &LiteralNode, aliases: &AliasMap) -> ItqlResult<LiteralValue> {
    let text = literal_text(literal);
    Ok(match &literal.datatype {
        Some(datatype) => LiteralValue::new_typed(text, aliases.resolve(datatype)?),
        None => LiteralValue::new_untyped(text),
    })
}

/// Concatenates the strands of a literal, decoding escape sequences.
pub fn literal_text(literal: &LiteralNode) -> String {
    let mut text = String::new();
    for strand in &literal.strands {
        match strand {
            Strand::Unescaped(unescaped) => text.push_str(unescaped),
            Strand::Escaped(escaped) => unescape(escaped, &mut text),
        }
    }
    text
}

fn unescape(escaped: &str, text: &mut String) {
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('r') => text.push('\r'),
            Some('t') => text.push('\t'),
            Some(other) => text.push(other),
            None => text.push('\\'),
        }
    }
}
