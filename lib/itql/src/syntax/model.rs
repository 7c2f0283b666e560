//! The model grammar of the `from` clause: `or` binds weakest, followed by `and`, then `par`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelExpressionNode {
    Term(ModelTermNode),
    /// `lhs or rhs`
    Or(Box<ModelExpressionNode>, ModelTermNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelTermNode {
    Part(ModelPartNode),
    /// `lhs and rhs`
    And(Box<ModelTermNode>, ModelPartNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelPartNode {
    Factor(ModelFactorNode),
    /// `lhs par rhs`
    Xor(Box<ModelPartNode>, ModelFactorNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelFactorNode {
    /// A resource token.
    Resource(String),
    /// `(expression)`
    Expression(Box<ModelExpressionNode>),
}

impl ModelExpressionNode {
    pub fn resource(token: impl Into<String>) -> Self {
        ModelFactorNode::Resource(token.into()).into()
    }

    pub fn or(lhs: impl Into<ModelExpressionNode>, rhs: impl Into<ModelTermNode>) -> Self {
        ModelExpressionNode::Or(Box::new(lhs.into()), rhs.into())
    }
}

impl ModelTermNode {
    pub fn and(lhs: impl Into<ModelTermNode>, rhs: impl Into<ModelPartNode>) -> Self {
        ModelTermNode::And(Box::new(lhs.into()), rhs.into())
    }
}

impl ModelPartNode {
    pub fn xor(lhs: impl Into<ModelPartNode>, rhs: impl Into<ModelFactorNode>) -> Self {
        ModelPartNode::Xor(Box::new(lhs.into()), rhs.into())
    }
}

impl ModelFactorNode {
    pub fn resource(token: impl Into<String>) -> Self {
        ModelFactorNode::Resource(token.into())
    }

    pub fn parenthesized(expression: impl Into<ModelExpressionNode>) -> Self {
        ModelFactorNode::Expression(Box::new(expression.into()))
    }
}

impl From<ModelFactorNode> for ModelPartNode {
    fn from(factor: ModelFactorNode) -> Self {
        ModelPartNode::Factor(factor)
    }
}

impl From<ModelPartNode> for ModelTermNode {
    fn from(part: ModelPartNode) -> Self {
        ModelTermNode::Part(part)
    }
}

impl From<ModelFactorNode> for ModelTermNode {
    fn from(factor: ModelFactorNode) -> Self {
        ModelTermNode::Part(factor.into())
    }
}

impl From<ModelTermNode> for ModelExpressionNode {
    fn from(term: ModelTermNode) -> Self {
        ModelExpressionNode::Term(term)
    }
}

impl From<ModelPartNode> for ModelExpressionNode {
    fn from(part: ModelPartNode) -> Self {
        ModelExpressionNode::Term(part.into())
    }
}

impl From<ModelFactorNode> for ModelExpressionNode {
    fn from(factor: ModelFactorNode) -> Self {
        ModelExpressionNode::Term(factor.into())
    }
}
