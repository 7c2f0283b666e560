use crate::syntax::{ModelExpressionNode, ModelFactorNode, ModelPartNode, ModelTermNode};
use crate::{AliasMap, ItqlResult};
use mulgara_model::ModelExpression;

/// Builds the [ModelExpression] of a `from` clause.
pub fn build_model_expression(
    expression: &ModelExpressionNode,
    aliases: &AliasMap,
) -> ItqlResult<ModelExpression> {
    let model = match expression {
        ModelExpressionNode::Term(term) => build_term(term, aliases)?,
        ModelExpressionNode::Or(lhs, rhs) => ModelExpression::union(
            build_model_expression(lhs, aliases)?,
            build_term(rhs, aliases)?,
        ),
    };
    tracing::debug!("built model expression {model}");
    Ok(model)
}

fn build_term(term: &ModelTermNode, aliases: &AliasMap) -> ItqlResult<ModelExpression> {
    Ok(match term {
        ModelTermNode::Part(part) => build_part(part, aliases)?,
        ModelTermNode::And(lhs, rhs) => {
            ModelExpression::intersection(build_term(lhs, aliases)?, build_part(rhs, aliases)?)
        }
    })
}

fn build_part(part: &ModelPartNode, aliases: &AliasMap) -> ItqlResult<ModelExpression> {
    Ok(match part {
        ModelPartNode::Factor(factor) => build_factor(factor, aliases)?,
        ModelPartNode::Xor(lhs, rhs) => {
            ModelExpression::partition(build_part(lhs, aliases)?, build_factor(rhs, aliases)?)
        }
    })
}

fn build_factor(factor: &ModelFactorNode, aliases: &AliasMap) -> ItqlResult<ModelExpression> {
    match factor {
        ModelFactorNode::Resource(token) => Ok(aliases.resolve(token)?.into()),
        ModelFactorNode::Expression(expression) => build_model_expression(expression, aliases),
    }
}
