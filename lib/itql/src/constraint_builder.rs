use crate::element::to_constraint_element;
use crate::syntax::{
    ConstraintDtermNode, ConstraintExpressionNode, ConstraintFactorNode, ConstraintNode,
    ConstraintTermNode, TransitiveClauseNode, WalkClauseNode,
};
use crate::{AliasMap, ItqlError, ItqlResult};
use mulgara_model::{Constraint, ConstraintExpression, ConstraintPattern, QueryError};

/// Builds [ConstraintExpression]s from the constraint grammar of `where` and `having` clauses.
///
/// Each production of the grammar is handled by one match arm. Operands are built
/// independently and combined afterward, so the builder itself is stateless apart from the
/// aliases it resolves resources with.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintExpressionBuilder<'a> {
    aliases: &'a AliasMap,
}

impl<'a> ConstraintExpressionBuilder<'a> {
    pub fn new(aliases: &'a AliasMap) -> Self {
        Self { aliases }
    }

    /// Builds the expression of a `where` clause.
    pub fn build(&self, expression: &ConstraintExpressionNode) -> ItqlResult<ConstraintExpression> {
        match expression {
            ConstraintExpressionNode::Term(term) => self.build_term(term),
            ConstraintExpressionNode::Or(lhs, rhs) => {
                let lhs = self.build(lhs)?;
                let rhs = self.build_term(rhs)?;
                tracing::debug!("built disjunction of {lhs} and {rhs}");
                Ok(ConstraintExpression::disjunction(lhs, rhs))
            }
        }
    }

    fn build_term(&self, term: &ConstraintTermNode) -> ItqlResult<ConstraintExpression> {
        match term {
            ConstraintTermNode::Dterm(dterm) => self.build_dterm(dterm),
            ConstraintTermNode::And(lhs, rhs) => {
                let lhs = self.build_term(lhs)?;
                let rhs = self.build_dterm(rhs)?;
                tracing::debug!("built conjunction of {lhs} and {rhs}");
                Ok(ConstraintExpression::conjunction(lhs, rhs))
            }
        }
    }

    fn build_dterm(&self, dterm: &ConstraintDtermNode) -> ItqlResult<ConstraintExpression> {
        match dterm {
            ConstraintDtermNode::Factor(factor) => self.build_factor(factor),
            ConstraintDtermNode::Minus {
                minuend,
                subtrahend,
            } => {
                let minuend = self.build_dterm(minuend)?;
                let subtrahend = self.build_factor(subtrahend)?;
                tracing::debug!("built difference of {minuend} and {subtrahend}");
                Ok(ConstraintExpression::difference(minuend, subtrahend))
            }
        }
    }

    fn build_factor(&self, factor: &ConstraintFactorNode) -> ItqlResult<ConstraintExpression> {
        match factor {
            ConstraintFactorNode::Constraint {
                constraint,
                exclude,
            } => {
                let constraint = Constraint::from(self.build_pattern(constraint)?);
                Ok(if *exclude {
                    constraint.negate().into()
                } else {
                    constraint.into()
                })
            }
            ConstraintFactorNode::Expression {
                expression,
                exclude,
            } => {
                let expression = self.build(expression)?;
                if *exclude {
                    negate(expression)
                } else {
                    Ok(expression)
                }
            }
            ConstraintFactorNode::Transitive(TransitiveClauseNode::Single(constraint)) => Ok(
                ConstraintExpression::SingleTransitive(self.build_transitive_pattern(constraint)?),
            ),
            ConstraintFactorNode::Transitive(TransitiveClauseNode::Anchored {
                anchor,
                pattern,
            }) => Ok(ConstraintExpression::Transitive {
                anchor: self.build_transitive_pattern(anchor)?,
                pattern: self.build_transitive_pattern(pattern)?,
            }),
            ConstraintFactorNode::Walk(WalkClauseNode { anchor, pattern }) => {
                Ok(ConstraintExpression::Walk {
                    anchor: self.build_transitive_pattern(anchor)?,
                    pattern: self.build_transitive_pattern(pattern)?,
                })
            }
        }
    }

    /// Builds a leaf constraint, scoped to the model of its `in` clause if it has one.
    fn build_pattern(&self, constraint: &ConstraintNode) -> ItqlResult<ConstraintPattern> {
        let subject = to_constraint_element(&constraint.subject, self.aliases)?;
        let predicate = to_constraint_element(&constraint.predicate, self.aliases)?;
        let object = to_constraint_element(&constraint.object, self.aliases)?;

        let pattern = match &constraint.in_clause {
            Some(model) => {
                let model = to_constraint_element(model, self.aliases)?;
                ConstraintPattern::try_new_in_model(subject, predicate, object, model)?
            }
            None => ConstraintPattern::try_new(subject, predicate, object)?,
        };
        tracing::debug!("built constraint {pattern}");
        Ok(pattern)
    }

    /// Builds the operand of `trans(...)` or `walk(...)`. These can not have an `in` clause.
    fn build_transitive_pattern(
        &self,
        constraint: &ConstraintNode,
    ) -> ItqlResult<ConstraintPattern> {
        if constraint.in_clause.is_some() {
            return Err(QueryError::IllegalInClauseOnTransitive.into());
        }
        self.build_pattern(constraint)
    }
}

fn negate(expression: ConstraintExpression) -> ItqlResult<ConstraintExpression> {
    match expression.into_constraint() {
        Ok(constraint) => Ok(constraint.negate().into()),
        Err(expression) => Err(ItqlError::internal(format!(
            "Only constraints can be negated, found {expression}"
        ))),
    }
}
