use crate::element::{to_literal, to_variable};
use crate::model_builder::build_model_expression;
use crate::syntax::{
    ConstraintExpressionNode, Direction, ElementNode, OrderElementNode, QueryClausesNode,
    QueryNode, SelectElementNode, SelectNode, SelectTriplesNode,
};
use crate::variable_factory::VariableFactory;
use crate::{AliasMap, ConstraintExpressionBuilder, ItqlError, ItqlResult};
use mulgara_model::{
    ConstantValue, Constraint, ConstraintExpression, ConstraintHaving, Order, Query, QueryError,
    SelectElement,
};

/// Assembles [Query]s from parsed `select` commands.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    aliases: &'a AliasMap,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(aliases: &'a AliasMap) -> Self {
        Self { aliases }
    }

    /// Builds a query from either form of a `select` command.
    ///
    /// The triple form `select $s $p $o from ... where ...` projects its three elements.
    pub fn build_query(&self, select: &SelectNode) -> ItqlResult<Query> {
        match select {
            SelectNode::Query(query) => self.build_select(query),
            SelectNode::Triples(triples) => self.build_select_triples(triples),
        }
    }

    pub fn build_select(&self, query: &QueryNode) -> ItqlResult<Query> {
        self.build(query.select.as_deref(), &query.clauses)
    }

    pub fn build_select_triples(&self, triples: &SelectTriplesNode) -> ItqlResult<Query> {
        let projection = [&triples.subject, &triples.predicate, &triples.object]
            .into_iter()
            .cloned()
            .map(SelectElementNode::Element)
            .collect::<Vec<_>>();
        self.build(Some(&projection), &triples.clauses)
    }

    /// Builds the expression of a `where` clause.
    pub fn build_constraint(
        &self,
        expression: &ConstraintExpressionNode,
    ) -> ItqlResult<ConstraintExpression> {
        ConstraintExpressionBuilder::new(self.aliases).build(expression)
    }

    /// Builds a `having` clause.
    ///
    /// A having clause consists of exactly one constraint whose predicate is one of
    /// `mulgara:occurs`, `mulgara:occursLessThan` and `mulgara:occursMoreThan`.
    pub fn build_having(
        &self,
        expression: &ConstraintExpressionNode,
    ) -> ItqlResult<ConstraintHaving> {
        let expression = self.build_constraint(expression)?;
        if expression.is_operation() {
            return Err(QueryError::MultipleHavingConstraints.into());
        }

        match expression {
            ConstraintExpression::Constraint(Constraint::Pattern(pattern)) => {
                Ok(ConstraintHaving::try_from(pattern)?)
            }
            _ => Err(QueryError::NonOccursHavingPredicate.into()),
        }
    }

    fn build(
        &self,
        projection: Option<&[SelectElementNode]>,
        clauses: &QueryClausesNode,
    ) -> ItqlResult<Query> {
        let from = clauses.from.as_ref().ok_or(QueryError::MissingFrom)?;
        let where_clause = clauses
            .where_clause
            .as_ref()
            .ok_or(QueryError::MissingWhere)?;

        let variables = self.build_variable_list(projection)?;
        let model = build_model_expression(from, self.aliases)?;
        let constraint = self.build_constraint(where_clause)?;
        tracing::debug!("built where clause {constraint}");

        let mut query = Query::try_new(variables, model, constraint)?;
        if let Some(order) = &clauses.order {
            query = query.with_order(build_order_list(order)?);
        }
        if let Some(having) = &clauses.having {
            query = query.with_having(self.build_having(having)?);
        }
        if let Some(limit) = &clauses.limit {
            query = query.with_limit(parse_count("limit", limit)?);
        }
        if let Some(offset) = &clauses.offset {
            query = query.with_offset(parse_count("offset", offset)?);
        }

        tracing::debug!("built query {query}");
        Ok(query)
    }

    /// Builds the projection. Repeated variables are projected once.
    fn build_variable_list(
        &self,
        projection: Option<&[SelectElementNode]>,
    ) -> ItqlResult<Vec<SelectElement>> {
        let Some(projection) = projection else {
            return Ok(Vec::new());
        };
        if projection.is_empty() {
            return Err(ItqlError::internal("Empty select clause"));
        }

        let mut factory = VariableFactory::default();
        let mut variables: Vec<SelectElement> = Vec::with_capacity(projection.len());
        for element in projection {
            let element = match element {
                SelectElementNode::Element(ElementNode::Variable(name)) => {
                    let variable = to_variable(name)?;
                    let variable = SelectElement::Variable(variable);
                    if variables.contains(&variable) {
                        continue;
                    }
                    variable
                }
                SelectElementNode::Element(ElementNode::Resource(token)) => {
                    SelectElement::Constant {
                        variable: factory.new_variable(),
                        value: ConstantValue::UriReference(self.aliases.resolve(token)?),
                    }
                }
                SelectElementNode::Element(ElementNode::Literal(literal)) => {
                    SelectElement::Constant {
                        variable: factory.new_variable(),
                        value: ConstantValue::Literal(to_literal(literal, self.aliases)?),
                    }
                }
                SelectElementNode::Count(query) => SelectElement::Count {
                    variable: factory.new_variable(),
                    query: Box::new(self.build_select(query)?),
                },
                SelectElementNode::Subquery(query) => SelectElement::Subquery {
                    variable: factory.new_variable(),
                    query: Box::new(self.build_select(query)?),
                },
            };
            variables.push(element);
        }

        if variables.is_empty() {
            return Err(QueryError::NoVariables.into());
        }
        Ok(variables)
    }
}

fn build_order_list(order: &[OrderElementNode]) -> ItqlResult<Vec<Order>> {
    if order.is_empty() {
        return Err(ItqlError::internal("Empty order by clause"));
    }

    order
        .iter()
        .map(|element| {
            let variable = to_variable(&element.variable)?;
            Ok(match element.direction {
                None | Some(Direction::Ascending) => Order::ascending(variable),
                Some(Direction::Descending) => Order::descending(variable),
            })
        })
        .collect()
}

fn parse_count(clause: &str, digits: &str) -> ItqlResult<usize> {
    digits
        .parse()
        .map_err(|_| ItqlError::internal(format!("Non-integer {clause} {digits}")))
}
