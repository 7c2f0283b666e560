use crate::{Literal, NamedNode, NamedNodeRef, Variable};
use std::fmt::{Display, Formatter};

/// A literal as it appears in a constraint.
///
/// ITQL literals are either typed (`'2.0'^^xsd:double`) or untyped. Untyped literals carry the
/// *empty* language tag rather than no language at all. Resolvers rely on this legacy convention,
/// so [LiteralValue::language] reports `Some("")` for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralValue {
    lexical_form: String,
    datatype: Option<NamedNode>,
}

impl LiteralValue {
    /// Creates an untyped literal.
    pub fn new_untyped(lexical_form: impl Into<String>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: None,
        }
    }

    /// Creates a literal with the given `datatype`.
    pub fn new_typed(lexical_form: impl Into<String>, datatype: impl Into<NamedNode>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: Some(datatype.into()),
        }
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    pub fn datatype(&self) -> Option<NamedNodeRef<'_>> {
        self.datatype.as_ref().map(NamedNode::as_ref)
    }

    /// The language tag. Always `Some("")` for untyped literals and `None` for typed ones.
    pub fn language(&self) -> Option<&str> {
        match self.datatype {
            None => Some(""),
            Some(_) => None,
        }
    }

    /// Converts this literal into an RDF literal. The empty language tag maps to a simple literal.
    pub fn to_rdf(&self) -> Literal {
        match &self.datatype {
            Some(datatype) => {
                Literal::new_typed_literal(self.lexical_form.as_str(), datatype.clone())
            }
            None => Literal::new_simple_literal(self.lexical_form.as_str()),
        }
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("'")?;
        for c in self.lexical_form.chars() {
            match c {
                '\'' => f.write_str("\\'")?,
                '\\' => f.write_str("\\\\")?,
                _ => write!(f, "{c}")?,
            }
        }
        f.write_str("'")?;
        if let Some(datatype) = &self.datatype {
            write!(f, "^^{datatype}")?;
        }
        Ok(())
    }
}

/// One position (subject, predicate, object or model) of a constraint.
///
/// Variables are identified by name. Two occurrences of `$x` in the same expression are equal
/// elements, regardless of where they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstraintElement {
    /// A variable, e.g. `$x`.
    Variable(Variable),
    /// A resource, e.g. `<http://example.com/p>`.
    UriReference(NamedNode),
    /// A literal, e.g. `'o'`.
    Literal(LiteralValue),
}

impl ConstraintElement {
    /// Returns the variable if this element is one.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            ConstraintElement::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    /// Returns the URI if this element is a resource.
    pub fn as_uri_reference(&self) -> Option<&NamedNode> {
        match self {
            ConstraintElement::UriReference(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ConstraintElement::Literal(_))
    }
}

impl Display for ConstraintElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintElement::Variable(variable) => write!(f, "${}", variable.as_str()),
            ConstraintElement::UriReference(uri) => uri.fmt(f),
            ConstraintElement::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<Variable> for ConstraintElement {
    fn from(variable: Variable) -> Self {
        ConstraintElement::Variable(variable)
    }
}

impl From<NamedNode> for ConstraintElement {
    fn from(uri: NamedNode) -> Self {
        ConstraintElement::UriReference(uri)
    }
}

impl From<NamedNodeRef<'_>> for ConstraintElement {
    fn from(uri: NamedNodeRef<'_>) -> Self {
        ConstraintElement::UriReference(uri.into_owned())
    }
}

impl From<LiteralValue> for ConstraintElement {
    fn from(literal: LiteralValue) -> Self {
        ConstraintElement::Literal(literal)
    }
}
