use crate::element::to_literal;
use crate::syntax::{TripleElementNode, TripleNode};
use crate::{AliasMap, ItqlResult};
use mulgara_model::{BlankNode, QueryError, Subject, Term, Triple};
use rustc_hash::{FxHashMap, FxHashSet};

/// The statements of a literal set of triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statements {
    pub triples: FxHashSet<Triple>,
    /// The placeholder of every variable that occurs in the triples, by variable name.
    pub variables: FxHashMap<String, BlankNode>,
}

/// Materializes a literal set of triples, e.g. `{ $x <urn:p> 'o' }`, into RDF triples.
///
/// Each variable becomes a fresh blank node. All occurrences of a variable within `triples`
/// share the same blank node.
pub fn to_statements(triples: &[TripleNode], aliases: &AliasMap) -> ItqlResult<Statements> {
    let mut statements = Statements::default();
    for triple in triples {
        let subject = to_term(&triple.subject, aliases, &mut statements.variables)?;
        let predicate = to_term(&triple.predicate, aliases, &mut statements.variables)?;
        let object = to_term(&triple.object, aliases, &mut statements.variables)?;

        let predicate = match predicate {
            Term::NamedNode(predicate) => predicate,
            Term::BlankNode(_) => return Err(QueryError::InvalidPredicate.into()),
            _ => return Err(QueryError::LiteralSubjectOrPredicate.into()),
        };
        let subject = to_subject(subject)?;

        statements.triples.insert(Triple::new(subject, predicate, object));
    }

    tracing::debug!(
        "materialized {} statements with {} variables",
        statements.triples.len(),
        statements.variables.len()
    );
    Ok(statements)
}

fn to_term(
    element: &TripleElementNode,
    aliases: &AliasMap,
    variables: &mut FxHashMap<String, BlankNode>,
) -> ItqlResult<Term> {
    Ok(match element {
        TripleElementNode::Variable(name) => variables
            .entry(name.clone())
            .or_insert_with(BlankNode::default)
            .clone()
            .into(),
        TripleElementNode::Resource(token) => aliases.resolve(token)?.into(),
        TripleElementNode::Literal(literal) => to_literal(literal, aliases)?.to_rdf().into(),
    })
}

fn to_subject(term: Term) -> ItqlResult<Subject> {
    match term {
        Term::NamedNode(node) => Ok(node.into()),
        Term::BlankNode(node) => Ok(node.into()),
        _ => Err(QueryError::LiteralSubjectOrPredicate.into()),
    }
}
