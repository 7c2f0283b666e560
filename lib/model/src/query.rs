use crate::{
    ConstraintExpression, ConstraintHaving, LiteralValue, ModelExpression, NamedNode, QueryError,
    QueryResult, Variable,
};
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// A constant projected by a select clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    UriReference(NamedNode),
    Literal(LiteralValue),
}

impl Display for ConstantValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstantValue::UriReference(uri) => uri.fmt(f),
            ConstantValue::Literal(literal) => literal.fmt(f),
        }
    }
}

/// One column of a select clause.
///
/// Everything except [SelectElement::Variable] is bound to a generated variable (`k0`, `k1`,
/// ...) that names the column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectElement {
    /// A variable of the `where` clause.
    Variable(Variable),
    /// A resource or literal.
    Constant {
        variable: Variable,
        value: ConstantValue,
    },
    /// `count(select ...)`: the number of rows of a nested query.
    Count { variable: Variable, query: Box<Query> },
    /// `subquery(select ...)`: a nested query evaluated per row.
    Subquery { variable: Variable, query: Box<Query> },
}

impl SelectElement {
    /// The variable that names the column.
    pub fn variable(&self) -> &Variable {
        match self {
            SelectElement::Variable(variable)
            | SelectElement::Constant { variable, .. }
            | SelectElement::Count { variable, .. }
            | SelectElement::Subquery { variable, .. } => variable,
        }
    }
}

impl Display for SelectElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectElement::Variable(variable) => write!(f, "${}", variable.as_str()),
            SelectElement::Constant { value, .. } => value.fmt(f),
            SelectElement::Count { query, .. } => write!(f, "count({query})"),
            SelectElement::Subquery { query, .. } => write!(f, "subquery({query})"),
        }
    }
}

impl From<Variable> for SelectElement {
    fn from(variable: Variable) -> Self {
        SelectElement::Variable(variable)
    }
}

/// A sort key of an `order by` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    pub variable: Variable,
    pub ascending: bool,
}

impl Order {
    pub fn ascending(variable: Variable) -> Self {
        Self {
            variable,
            ascending: true,
        }
    }

    pub fn descending(variable: Variable) -> Self {
        Self {
            variable,
            ascending: false,
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let direction = if self.ascending { "asc" } else { "desc" };
        write!(f, "${} {direction}", self.variable.as_str())
    }
}

/// The answer a query is evaluated against (the `given` clause).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GivenAnswer {
    /// No restriction; all bindings are acceptable.
    #[default]
    Unconstrained,
}

/// An immutable ITQL query.
///
/// A query is created from its mandatory parts with [Query::try_new] and extended with the
/// optional clauses afterward:
///
/// ```
/// # use mulgara_model::*;
/// # fn main() -> QueryResult<()> {
/// let x = Variable::new_unchecked("x");
/// let pattern = ConstraintPattern::try_new(
///     x.clone().into(),
///     NamedNode::new_unchecked("urn:p").into(),
///     LiteralValue::new_untyped("o").into(),
/// )?;
/// let query = Query::try_new(
///     vec![x.clone().into()],
///     NamedNode::new_unchecked("urn:m").into(),
///     pattern.into(),
/// )?
/// .with_order(vec![Order::descending(x)])
/// .with_limit(10);
///
/// assert_eq!(
///     query.to_string(),
///     "select $x from <urn:m> where [$x <urn:p> 'o'] order by $x desc limit 10"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    variables: Vec<SelectElement>,
    model: ModelExpression,
    constraint: ConstraintExpression,
    having: Option<ConstraintHaving>,
    order: Vec<Order>,
    limit: Option<usize>,
    offset: usize,
    given: GivenAnswer,
}

impl Query {
    /// Creates a new query.
    ///
    /// An empty `variables` list projects all bound variables. Every projected variable of the
    /// `where` clause must occur in `constraint`.
    pub fn try_new(
        variables: Vec<SelectElement>,
        model: ModelExpression,
        constraint: ConstraintExpression,
    ) -> QueryResult<Self> {
        let constrained = constraint.variables();
        if let Some(unconstrained) = variables.iter().find_map(|element| match element {
            SelectElement::Variable(variable) if !constrained.contains(variable) => Some(variable),
            _ => None,
        }) {
            return Err(QueryError::UnconstrainedVariable(
                unconstrained.as_str().to_owned(),
            ));
        }

        Ok(Self {
            variables,
            model,
            constraint,
            having: None,
            order: Vec::new(),
            limit: None,
            offset: 0,
            given: GivenAnswer::default(),
        })
    }

    #[must_use]
    pub fn with_having(mut self, having: ConstraintHaving) -> Self {
        self.having = Some(having);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: Vec<Order>) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn variables(&self) -> &[SelectElement] {
        &self.variables
    }

    pub fn model(&self) -> &ModelExpression {
        &self.model
    }

    pub fn constraint(&self) -> &ConstraintExpression {
        &self.constraint
    }

    pub fn having(&self) -> Option<&ConstraintHaving> {
        self.having.as_ref()
    }

    pub fn order(&self) -> &[Order] {
        &self.order
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn given(&self) -> GivenAnswer {
        self.given
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.variables.is_empty() {
            write!(f, "select {} ", self.variables.iter().join(" "))?;
        }
        write!(f, "from {} where {}", self.model, self.constraint)?;
        if let Some(having) = &self.having {
            write!(f, " having {having}")?;
        }
        if !self.order.is_empty() {
            write!(f, " order by {}", self.order.iter().join(" "))?;
        }
        if let Some(limit) = self.limit {
            write!(f, " limit {limit}")?;
        }
        if self.offset != 0 {
            write!(f, " offset {}", self.offset)?;
        }
        Ok(())
    }
}
