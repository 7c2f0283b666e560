/// A subject, predicate, object or model position of a constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementNode {
    /// `$name`, stored without the `$`.
    Variable(String),
    /// A resource token, either a full URI or a `prefix:local` name.
    Resource(String),
    Literal(LiteralNode),
}

impl ElementNode {
    pub fn variable(name: impl Into<String>) -> Self {
        ElementNode::Variable(name.into())
    }

    pub fn resource(token: impl Into<String>) -> Self {
        ElementNode::Resource(token.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        ElementNode::Literal(LiteralNode::new(text))
    }
}

impl From<LiteralNode> for ElementNode {
    fn from(literal: LiteralNode) -> Self {
        ElementNode::Literal(literal)
    }
}

/// A quoted literal, split by the lexer into strands of plain text and escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralNode {
    pub strands: Vec<Strand>,
    /// The resource token of a `^^datatype` suffix.
    pub datatype: Option<String>,
}

impl LiteralNode {
    /// A literal that consists of a single unescaped strand.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_strands(vec![Strand::Unescaped(text.into())])
    }

    pub fn from_strands(strands: Vec<Strand>) -> Self {
        Self {
            strands,
            datatype: None,
        }
    }

    #[must_use]
    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strand {
    Unescaped(String),
    /// An escape sequence including its backslash, e.g. `\'`.
    Escaped(String),
}
