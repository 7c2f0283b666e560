//! The constraint grammar.
//!
//! The productions encode operator precedence: `or` binds weakest, followed by `and`, then
//! `minus`. Factors are leaves, parenthesised expressions, `trans(...)` and `walk(...)`. All
//! binary productions are left-recursive.

use crate::syntax::ElementNode;

/// `subject predicate object [in model]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintNode {
    pub subject: ElementNode,
    pub predicate: ElementNode,
    pub object: ElementNode,
    pub in_clause: Option<ElementNode>,
}

impl ConstraintNode {
    pub fn new(subject: ElementNode, predicate: ElementNode, object: ElementNode) -> Self {
        Self {
            subject,
            predicate,
            object,
            in_clause: None,
        }
    }

    #[must_use]
    pub fn in_model(mut self, model: ElementNode) -> Self {
        self.in_clause = Some(model);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintFactorNode {
    /// A constraint, negated by a leading `not`.
    Constraint {
        constraint: ConstraintNode,
        exclude: bool,
    },
    /// `(expression)`, negated by a leading `not`.
    Expression {
        expression: Box<ConstraintExpressionNode>,
        exclude: bool,
    },
    Transitive(TransitiveClauseNode),
    Walk(WalkClauseNode),
}

impl ConstraintFactorNode {
    /// `not constraint`
    pub fn excluded(constraint: ConstraintNode) -> Self {
        ConstraintFactorNode::Constraint {
            constraint,
            exclude: true,
        }
    }

    /// `(expression)`
    pub fn parenthesized(expression: impl Into<ConstraintExpressionNode>) -> Self {
        ConstraintFactorNode::Expression {
            expression: Box::new(expression.into()),
            exclude: false,
        }
    }

    /// `not (expression)`
    pub fn excluded_expression(expression: impl Into<ConstraintExpressionNode>) -> Self {
        ConstraintFactorNode::Expression {
            expression: Box::new(expression.into()),
            exclude: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitiveClauseNode {
    /// `trans(constraint)`
    Single(ConstraintNode),
    /// `trans(anchor and pattern)`
    Anchored {
        anchor: ConstraintNode,
        pattern: ConstraintNode,
    },
}

/// `walk(anchor and pattern)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkClauseNode {
    pub anchor: ConstraintNode,
    pub pattern: ConstraintNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintDtermNode {
    Factor(ConstraintFactorNode),
    /// `minuend minus subtrahend`
    Minus {
        minuend: Box<ConstraintDtermNode>,
        subtrahend: ConstraintFactorNode,
    },
}

impl ConstraintDtermNode {
    pub fn minus(
        minuend: impl Into<ConstraintDtermNode>,
        subtrahend: impl Into<ConstraintFactorNode>,
    ) -> Self {
        ConstraintDtermNode::Minus {
            minuend: Box::new(minuend.into()),
            subtrahend: subtrahend.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintTermNode {
    Dterm(ConstraintDtermNode),
    /// `lhs and rhs`
    And(Box<ConstraintTermNode>, ConstraintDtermNode),
}

impl ConstraintTermNode {
    pub fn and(lhs: impl Into<ConstraintTermNode>, rhs: impl Into<ConstraintDtermNode>) -> Self {
        ConstraintTermNode::And(Box::new(lhs.into()), rhs.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintExpressionNode {
    Term(ConstraintTermNode),
    /// `lhs or rhs`
    Or(Box<ConstraintExpressionNode>, ConstraintTermNode),
}

impl ConstraintExpressionNode {
    pub fn or(
        lhs: impl Into<ConstraintExpressionNode>,
        rhs: impl Into<ConstraintTermNode>,
    ) -> Self {
        ConstraintExpressionNode::Or(Box::new(lhs.into()), rhs.into())
    }
}

impl From<ConstraintNode> for ConstraintFactorNode {
    fn from(constraint: ConstraintNode) -> Self {
        ConstraintFactorNode::Constraint {
            constraint,
            exclude: false,
        }
    }
}

impl From<TransitiveClauseNode> for ConstraintFactorNode {
    fn from(clause: TransitiveClauseNode) -> Self {
        ConstraintFactorNode::Transitive(clause)
    }
}

impl From<WalkClauseNode> for ConstraintFactorNode {
    fn from(clause: WalkClauseNode) -> Self {
        ConstraintFactorNode::Walk(clause)
    }
}

impl From<ConstraintFactorNode> for ConstraintDtermNode {
    fn from(factor: ConstraintFactorNode) -> Self {
        ConstraintDtermNode::Factor(factor)
    }
}

impl From<ConstraintNode> for ConstraintDtermNode {
    fn from(constraint: ConstraintNode) -> Self {
        ConstraintDtermNode::Factor(constraint.into())
    }
}

impl From<TransitiveClauseNode> for ConstraintDtermNode {
    fn from(clause: TransitiveClauseNode) -> Self {
        ConstraintDtermNode::Factor(clause.into())
    }
}

impl From<WalkClauseNode> for ConstraintDtermNode {
    fn from(clause: WalkClauseNode) -> Self {
        ConstraintDtermNode::Factor(clause.into())
    }
}

impl From<ConstraintDtermNode> for ConstraintTermNode {
    fn from(dterm: ConstraintDtermNode) -> Self {
        ConstraintTermNode::Dterm(dterm)
    }
}

impl From<ConstraintNode> for ConstraintTermNode {
    fn from(constraint: ConstraintNode) -> Self {
        ConstraintTermNode::Dterm(constraint.into())
    }
}

impl From<ConstraintFactorNode> for ConstraintTermNode {
    fn from(factor: ConstraintFactorNode) -> Self {
        ConstraintTermNode::Dterm(factor.into())
    }
}

impl From<ConstraintTermNode> for ConstraintExpressionNode {
    fn from(term: ConstraintTermNode) -> Self {
        ConstraintExpressionNode::Term(term)
    }
}

impl From<ConstraintDtermNode> for ConstraintExpressionNode {
    fn from(dterm: ConstraintDtermNode) -> Self {
        ConstraintExpressionNode::Term(dterm.into())
    }
}

impl From<ConstraintFactorNode> for ConstraintExpressionNode {
    fn from(factor: ConstraintFactorNode) -> Self {
        ConstraintExpressionNode::Term(factor.into())
    }
}

impl From<ConstraintNode> for ConstraintExpressionNode {
    fn from(constraint: ConstraintNode) -> Self {
        ConstraintExpressionNode::Term(constraint.into())
    }
}
