use crate::test_utils::{aliases, lit, res, typed, var};
use mulgara_itql::syntax::TripleNode;
use mulgara_itql::{to_statements, AliasMap, ItqlResult};
use mulgara_model::{Literal, NamedNode, Subject, Term, Triple};

#[test]
fn ground_triples_with_aliases() -> ItqlResult<()> {
    let aliases = aliases(&[("dc", "http://purl.org/dc/elements/1.1/")])?;
    let triples = [
        TripleNode::new(res("urn:book"), res("dc:title"), lit("Dune")),
        TripleNode::new(
            res("urn:book"),
            res("dc:date"),
            typed("1965", "http://www.w3.org/2001/XMLSchema#gYear"),
        ),
    ];

    let statements = to_statements(&triples, &aliases)?;
    assert!(statements.variables.is_empty());
    assert!(statements.triples.contains(&Triple::new(
        NamedNode::new_unchecked("urn:book"),
        NamedNode::new_unchecked("http://purl.org/dc/elements/1.1/title"),
        Literal::new_simple_literal("Dune"),
    )));
    assert!(statements.triples.contains(&Triple::new(
        NamedNode::new_unchecked("urn:book"),
        NamedNode::new_unchecked("http://purl.org/dc/elements/1.1/date"),
        Literal::new_typed_literal(
            "1965",
            NamedNode::new_unchecked("http://www.w3.org/2001/XMLSchema#gYear"),
        ),
    )));
    Ok(())
}

#[test]
fn variable_links_subject_and_object() -> ItqlResult<()> {
    let triples = [
        TripleNode::new(res("urn:a"), res("urn:knows"), var("b")),
        TripleNode::new(var("b"), res("urn:name"), lit("Bob")),
    ];

    let statements = to_statements(&triples, &AliasMap::new())?;
    let b = statements.variables["b"].clone();
    assert!(statements
        .triples
        .iter()
        .any(|triple| triple.object == Term::from(b.clone())));
    assert!(statements
        .triples
        .iter()
        .any(|triple| triple.subject == Subject::from(b.clone())));
    Ok(())
}

#[test]
fn duplicate_triples_collapse() -> ItqlResult<()> {
    let triple = TripleNode::new(res("urn:a"), res("urn:p"), lit("o"));
    let statements = to_statements(&[triple.clone(), triple], &AliasMap::new())?;
    assert_eq!(statements.triples.len(), 1);
    Ok(())
}
