use mulgara_itql::syntax::{
    ConstraintNode, ElementNode, LiteralNode, ModelExpressionNode, QueryClausesNode, QueryNode,
    SelectNode,
};
use mulgara_itql::{AliasMap, ItqlResult};
use mulgara_model::Iri;

pub const OCCURS: &str = "http://mulgara.org/mulgara#occurs";
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

pub fn var(name: &str) -> ElementNode {
    ElementNode::variable(name)
}

pub fn res(token: &str) -> ElementNode {
    ElementNode::resource(token)
}

pub fn lit(text: &str) -> ElementNode {
    ElementNode::literal(text)
}

pub fn typed(text: &str, datatype: &str) -> ElementNode {
    LiteralNode::new(text).with_datatype(datatype).into()
}

pub fn constraint(
    subject: ElementNode,
    predicate: ElementNode,
    object: ElementNode,
) -> ConstraintNode {
    ConstraintNode::new(subject, predicate, object)
}

/// `$x <urn:p> 'o'`
pub fn simple_constraint() -> ConstraintNode {
    constraint(var("x"), res("urn:p"), lit("o"))
}

/// `from <urn:m> where $x <urn:p> 'o'`
pub fn simple_clauses() -> QueryClausesNode {
    QueryClausesNode::new(ModelExpressionNode::resource("urn:m"), simple_constraint())
}

/// `select $variables... <clauses>`
pub fn select(variables: &[&str], clauses: QueryClausesNode) -> SelectNode {
    QueryNode::new(
        variables.iter().map(|name| var(name).into()).collect(),
        clauses,
    )
    .into()
}

pub fn aliases(entries: &[(&str, &str)]) -> ItqlResult<AliasMap> {
    let mut aliases = AliasMap::new();
    for (prefix, namespace) in entries {
        let namespace = Iri::parse((*namespace).to_owned()).map_err(|error| {
            mulgara_itql::ItqlError::MalformedReference {
                text: (*namespace).to_owned(),
                error,
            }
        })?;
        aliases.insert(*prefix, namespace);
    }
    Ok(aliases)
}
