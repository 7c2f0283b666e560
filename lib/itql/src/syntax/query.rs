use crate::syntax::{ConstraintExpressionNode, ElementNode, ModelExpressionNode};

/// `select elements from ... where ... [order by ...] [having ...] [limit n] [offset n]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNode {
    /// The projection. `None` if the select clause lists nothing.
    pub select: Option<Vec<SelectElementNode>>,
    pub clauses: QueryClausesNode,
}

impl QueryNode {
    pub fn new(select: Vec<SelectElementNode>, clauses: QueryClausesNode) -> Self {
        Self {
            select: Some(select),
            clauses,
        }
    }
}

/// `select subject predicate object from ... where ...`, the query form of a set of triples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectTriplesNode {
    pub subject: ElementNode,
    pub predicate: ElementNode,
    pub object: ElementNode,
    pub clauses: QueryClausesNode,
}

/// The clauses following the projection.
///
/// The grammar requires `from` and `where`. They are optional here so that their absence can be
/// reported instead of being unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryClausesNode {
    pub from: Option<ModelExpressionNode>,
    pub where_clause: Option<ConstraintExpressionNode>,
    pub order: Option<Vec<OrderElementNode>>,
    pub having: Option<ConstraintExpressionNode>,
    /// The digits of a `limit` clause.
    pub limit: Option<String>,
    /// The digits of an `offset` clause.
    pub offset: Option<String>,
}

impl QueryClausesNode {
    pub fn new(
        from: impl Into<ModelExpressionNode>,
        where_clause: impl Into<ConstraintExpressionNode>,
    ) -> Self {
        Self {
            from: Some(from.into()),
            where_clause: Some(where_clause.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: Vec<OrderElementNode>) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn with_having(mut self, having: impl Into<ConstraintExpressionNode>) -> Self {
        self.having = Some(having.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }
}

/// Either form of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectNode {
    Query(QueryNode),
    Triples(SelectTriplesNode),
}

impl SelectNode {
    pub fn clauses(&self) -> &QueryClausesNode {
        match self {
            SelectNode::Query(query) => &query.clauses,
            SelectNode::Triples(triples) => &triples.clauses,
        }
    }
}

impl From<QueryNode> for SelectNode {
    fn from(query: QueryNode) -> Self {
        SelectNode::Query(query)
    }
}

impl From<SelectTriplesNode> for SelectNode {
    fn from(triples: SelectTriplesNode) -> Self {
        SelectNode::Triples(triples)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectElementNode {
    /// A variable, resource or literal.
    Element(ElementNode),
    /// `count(select ...)`
    Count(Box<QueryNode>),
    /// `subquery(select ...)`
    Subquery(Box<QueryNode>),
}

impl From<ElementNode> for SelectElementNode {
    fn from(element: ElementNode) -> Self {
        SelectElementNode::Element(element)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// `$variable [asc|desc]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderElementNode {
    pub variable: String,
    pub direction: Option<Direction>,
}

impl OrderElementNode {
    pub fn new(variable: impl Into<String>, direction: Option<Direction>) -> Self {
        Self {
            variable: variable.into(),
            direction,
        }
    }
}

/// The elements of a literal triple share the constraint element grammar.
pub type TripleElementNode = ElementNode;

/// `subject predicate object` of an insertion or a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripleNode {
    pub subject: TripleElementNode,
    pub predicate: TripleElementNode,
    pub object: TripleElementNode,
}

impl TripleNode {
    pub fn new(
        subject: TripleElementNode,
        predicate: TripleElementNode,
        object: TripleElementNode,
    ) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// The statements of an `insert` or `delete` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOfTriplesNode {
    Triples(Vec<TripleNode>),
    Select(Box<SelectTriplesNode>),
    /// A whole model.
    Resource(String),
}
