use crate::test_utils::{aliases, constraint, lit, res, simple_constraint, typed, var, OCCURS};
use insta::assert_snapshot;
use mulgara_itql::syntax::{
    ConstraintExpressionNode, ConstraintFactorNode, ConstraintNode, ConstraintTermNode,
    TransitiveClauseNode, WalkClauseNode,
};
use mulgara_itql::{AliasMap, ConstraintExpressionBuilder, ItqlError, ItqlResult, QueryBuilder};
use mulgara_model::{Constraint, ConstraintExpression, ConstraintKind, QueryError};

fn other_constraint() -> ConstraintNode {
    constraint(var("x"), res("urn:q"), var("y"))
}

#[test]
fn operands_are_built_independently() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    let builder = ConstraintExpressionBuilder::new(&aliases);
    let node = ConstraintTermNode::and(simple_constraint(), other_constraint());

    let ConstraintExpression::Conjunction(lhs, rhs) = builder.build(&node.into())? else {
        panic!("expected a conjunction");
    };
    assert_eq!(*lhs, builder.build(&simple_constraint().into())?);
    assert_eq!(*rhs, builder.build(&other_constraint().into())?);
    Ok(())
}

#[test]
fn or_binds_weaker_than_and() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    // $x <urn:p> 'o' or $x <urn:q> $y and $y <urn:r> 'z'
    let node = ConstraintExpressionNode::or(
        simple_constraint(),
        ConstraintTermNode::and(other_constraint(), constraint(var("y"), res("urn:r"), lit("z"))),
    );

    let expression = ConstraintExpressionBuilder::new(&aliases).build(&node)?;
    assert_snapshot!(expression, @"([$x <urn:p> 'o'] or ([$x <urn:q> $y] and [$y <urn:r> 'z']))");
    Ok(())
}

#[test]
fn double_negation_is_kept() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    // not (not $x <urn:p> 'o')
    let node = ConstraintFactorNode::excluded_expression(ConstraintFactorNode::excluded(
        simple_constraint(),
    ));

    let expression = ConstraintExpressionBuilder::new(&aliases).build(&node.into())?;
    assert_snapshot!(expression, @"not not [$x <urn:p> 'o']");

    let ConstraintExpression::Constraint(Constraint::Negation(inner)) = &expression else {
        panic!("expected a negation");
    };
    assert!(inner.is_negated());
    Ok(())
}

#[test]
fn constraint_in_model() -> ItqlResult<()> {
    let aliases = aliases(&[("m", "rmi://localhost/server1#")])?;
    let node = simple_constraint().in_model(res("m:g"));

    let expression = ConstraintExpressionBuilder::new(&aliases).build(&node.into())?;
    assert_snapshot!(expression, @"[$x <urn:p> 'o' in <rmi://localhost/server1#g>]");
    Ok(())
}

#[test]
fn transitive_and_walk() -> ItqlResult<()> {
    let aliases = AliasMap::new();
    let builder = ConstraintExpressionBuilder::new(&aliases);
    let anchor = constraint(res("urn:a"), res("urn:sub"), var("y"));
    let pattern = constraint(var("x"), res("urn:sub"), var("y"));

    let single = TransitiveClauseNode::Single(pattern.clone());
    let single = builder.build(&ConstraintFactorNode::from(single).into())?;
    assert_snapshot!(single, @"trans([$x <urn:sub> $y])");

    let anchored = builder.build(
        &ConstraintFactorNode::from(TransitiveClauseNode::Anchored {
            anchor: anchor.clone(),
            pattern: pattern.clone(),
        })
        .into(),
    )?;
    assert_snapshot!(anchored, @"trans([<urn:a> <urn:sub> $y] and [$x <urn:sub> $y])");

    let walk = ConstraintFactorNode::from(WalkClauseNode { anchor, pattern });
    let walk = builder.build(&walk.into())?;
    assert_snapshot!(walk, @"walk([<urn:a> <urn:sub> $y] and [$x <urn:sub> $y])");
    Ok(())
}

#[test]
fn transitive_constraint_with_in_clause() {
    let aliases = AliasMap::new();
    let node = ConstraintFactorNode::from(TransitiveClauseNode::Single(
        simple_constraint().in_model(res("urn:g")),
    ));

    let result = ConstraintExpressionBuilder::new(&aliases).build(&node.into());
    let Err(error) = result else {
        panic!("the constraint must be rejected");
    };
    assert_snapshot!(error, @"Illegal in clause on transitive constraint.");
}

#[test]
fn anchored_transitive_constraint_with_in_clause() {
    let aliases = AliasMap::new();
    let node = ConstraintFactorNode::from(TransitiveClauseNode::Anchored {
        anchor: constraint(res("urn:a"), res("urn:sub"), var("y")).in_model(res("urn:g")),
        pattern: constraint(var("x"), res("urn:sub"), var("y")),
    });

    let result = ConstraintExpressionBuilder::new(&aliases).build(&node.into());
    assert!(matches!(
        result,
        Err(ItqlError::Query(QueryError::IllegalInClauseOnTransitive))
    ));
}

#[test]
fn walk_with_in_clause() {
    let aliases = AliasMap::new();
    let node = ConstraintFactorNode::from(WalkClauseNode {
        anchor: simple_constraint(),
        pattern: other_constraint().in_model(res("urn:g")),
    });

    let result = ConstraintExpressionBuilder::new(&aliases).build(&node.into());
    assert!(matches!(
        result,
        Err(ItqlError::Query(QueryError::IllegalInClauseOnTransitive))
    ));
}

#[test]
fn having_accepts_occurs_family() -> ItqlResult<()> {
    let aliases = aliases(&[("tucana", "http://tucana.org/tucana#")])?;
    let builder = QueryBuilder::new(&aliases);

    let occurs = builder.build_having(&constraint(var("x"), res(OCCURS), lit("2")).into())?;
    assert_eq!(occurs.kind(), ConstraintKind::Occurs);

    let less = builder.build_having(
        &constraint(
            var("x"),
            res("tucana:occursLessThan"),
            typed("3", "http://www.w3.org/2001/XMLSchema#double"),
        )
        .into(),
    )?;
    assert_eq!(less.kind(), ConstraintKind::OccursLessThan);
    Ok(())
}

#[test]
fn having_rejects_other_predicates() {
    let aliases = AliasMap::new();
    let builder = QueryBuilder::new(&aliases);

    let plain = builder.build_having(&simple_constraint().into());
    assert!(matches!(
        plain,
        Err(ItqlError::Query(QueryError::NonOccursHavingPredicate))
    ));

    let not_occurs = builder.build_having(
        &constraint(var("x"), res("http://mulgara.org/mulgara#notOccurs"), lit("2")).into(),
    );
    assert!(matches!(
        not_occurs,
        Err(ItqlError::Query(QueryError::NonOccursHavingPredicate))
    ));

    let negated = ConstraintFactorNode::excluded(constraint(var("x"), res(OCCURS), lit("2")));
    let negated = builder.build_having(&negated.into());
    assert!(matches!(
        negated,
        Err(ItqlError::Query(QueryError::NonOccursHavingPredicate))
    ));
}

#[test]
fn having_rejects_multiple_constraints() {
    let aliases = AliasMap::new();
    let node = ConstraintTermNode::and(
        constraint(var("x"), res(OCCURS), lit("2")),
        constraint(var("y"), res(OCCURS), lit("3")),
    );

    let result = QueryBuilder::new(&aliases).build_having(&node.into());
    let Err(error) = result else {
        panic!("the having clause must be rejected");
    };
    assert_snapshot!(error, @"Having currently supports only one constraint");
}
