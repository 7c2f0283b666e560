use crate::test_utils::{
    constraint, lit, res, select, simple_clauses, simple_constraint, typed, var, OCCURS,
    RDFS_LABEL, XSD_DOUBLE,
};
use insta::assert_snapshot;
use mulgara_itql::syntax::{
    ConstraintFactorNode, ConstraintTermNode, Direction, ModelExpressionNode, OrderElementNode,
    QueryClausesNode, QueryNode, SelectElementNode, SelectTriplesNode,
};
use mulgara_itql::{AliasMap, ItqlError, ItqlResult, QueryBuilder};
use mulgara_model::{ConstraintExpression, ConstraintKind, QueryError, Variable};

#[test]
fn simple_select() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    let query = QueryBuilder::new(&aliases).build_query(&select(&["x"], simple_clauses()))?;

    assert_snapshot!(query, @"select $x from <urn:m> where [$x <urn:p> 'o']");
    assert_eq!(query.limit(), None);
    assert_eq!(query.offset(), 0);
    Ok(())
}

#[test]
fn limit_and_offset() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    let clauses = simple_clauses().with_limit("10").with_offset("2");
    let query = QueryBuilder::new(&aliases).build_query(&select(&["x"], clauses))?;

    assert_snapshot!(query, @"select $x from <urn:m> where [$x <urn:p> 'o'] limit 10 offset 2");
    assert_eq!(query.limit(), Some(10));
    assert_eq!(query.offset(), 2);
    Ok(())
}

#[test]
fn order_by_defaults_to_ascending() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    let clauses = QueryClausesNode::new(
        ModelExpressionNode::resource("urn:m"),
        constraint(var("x"), res("urn:p"), var("y")),
    )
    .with_order(vec![
        OrderElementNode::new("y", Some(Direction::Descending)),
        OrderElementNode::new("x", None),
    ]);
    let query = QueryBuilder::new(&aliases).build_query(&select(&["x", "y"], clauses))?;

    assert_snapshot!(query, @"select $x $y from <urn:m> where [$x <urn:p> $y] order by $y desc $x asc");
    Ok(())
}

#[test]
fn having_occurs() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    let clauses =
        simple_clauses().with_having(constraint(var("x"), res(OCCURS), typed("2.0", XSD_DOUBLE)));
    let query = QueryBuilder::new(&aliases).build_query(&select(&["x"], clauses))?;

    assert_snapshot!(query, @"select $x from <urn:m> where [$x <urn:p> 'o'] having [$x <http://mulgara.org/mulgara#occurs> '2.0'^^<http://www.w3.org/2001/XMLSchema#double>]");
    let having = query.having().map(|having| having.kind());
    assert_eq!(having, Some(ConstraintKind::Occurs));
    Ok(())
}

#[test]
fn conjunction_with_variable_predicate() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    // (($x $y 'Subject') and ($x rdfs:label 'Subject'))
    let where_clause = ConstraintFactorNode::parenthesized(ConstraintTermNode::and(
        ConstraintFactorNode::parenthesized(constraint(var("x"), var("y"), lit("Subject"))),
        ConstraintFactorNode::parenthesized(constraint(var("x"), res(RDFS_LABEL), lit("Subject"))),
    ));
    let clauses = QueryClausesNode::new(ModelExpressionNode::resource("urn:m"), where_clause);
    let query = QueryBuilder::new(&aliases).build_query(&select(&["x", "y"], clauses))?;

    assert_snapshot!(query, @"select $x $y from <urn:m> where ([$x $y 'Subject'] and [$x <http://www.w3.org/2000/01/rdf-schema#label> 'Subject'])");

    let ConstraintExpression::Conjunction(lhs, rhs) = query.constraint() else {
        panic!("expected a conjunction, got {}", query.constraint());
    };
    let patterns = [lhs, rhs].map(|operand| operand.patterns());
    assert!(patterns
        .iter()
        .flatten()
        .all(|pattern| pattern.subject().as_variable().map(Variable::as_str) == Some("x")));
    Ok(())
}

#[test]
fn constants_and_subqueries_are_named_in_order() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    let nested = QueryNode::new(vec![var("x").into()], simple_clauses());
    let node = QueryNode::new(
        vec![
            var("x").into(),
            res("urn:r").into(),
            SelectElementNode::Subquery(Box::new(nested.clone())),
            SelectElementNode::Count(Box::new(nested)),
        ],
        simple_clauses(),
    );
    let query = QueryBuilder::new(&aliases).build_query(&node.into())?;

    assert_snapshot!(query, @"select $x <urn:r> subquery(select $x from <urn:m> where [$x <urn:p> 'o']) count(select $x from <urn:m> where [$x <urn:p> 'o']) from <urn:m> where [$x <urn:p> 'o']");
    let names = query
        .variables()
        .iter()
        .map(|element| element.variable().as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["x", "k0", "k1", "k2"]);
    Ok(())
}

#[test]
fn select_triples_projects_its_elements() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    let node = SelectTriplesNode {
        subject: var("x"),
        predicate: res("urn:p"),
        object: lit("o"),
        clauses: simple_clauses(),
    };
    let query = QueryBuilder::new(&aliases).build_query(&node.into())?;

    assert_snapshot!(query, @"select $x <urn:p> 'o' from <urn:m> where [$x <urn:p> 'o']");
    Ok(())
}

#[test]
fn unconstrained_variable() {
    let aliases = AliasMap::new();
    let result = QueryBuilder::new(&aliases).build_query(&select(&["x", "z"], simple_clauses()));

    let Err(error) = result else {
        panic!("the query must be rejected");
    };
    assert_snapshot!(error, @"Failed to constrain all variables: $z not constrained in WHERE or GIVEN clauses");
}

#[test]
fn missing_from() {
    let aliases = AliasMap::new();
    let clauses = QueryClausesNode {
        where_clause: Some(simple_constraint().into()),
        ..QueryClausesNode::default()
    };
    let result = QueryBuilder::new(&aliases).build_query(&select(&["x"], clauses));

    assert!(matches!(
        result,
        Err(ItqlError::Query(QueryError::MissingFrom))
    ));
}

#[test]
fn missing_where() {
    let aliases = AliasMap::new();
    let clauses = QueryClausesNode {
        from: Some(ModelExpressionNode::resource("urn:m")),
        ..QueryClausesNode::default()
    };
    let result = QueryBuilder::new(&aliases).build_query(&select(&["x"], clauses));

    let Err(error) = result else {
        panic!("the query must be rejected");
    };
    assert_snapshot!(error, @"WHERE clause missing.");
}
