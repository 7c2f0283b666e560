use thiserror::Error;

/// A light-weight result for query model construction.
pub type QueryResult<T> = Result<T, QueryError>;

/// A semantic error in a query or command.
///
/// These errors are raised by the user (e.g., a transitive constraint scoped to a model) and are
/// reported back verbatim. They are never caused by a defect in the query front end itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QueryError {
    /// A query without a `from` clause.
    #[error("FROM clause missing.")]
    MissingFrom,
    /// A query without a `where` clause.
    #[error("WHERE clause missing.")]
    MissingWhere,
    /// A select list that did not yield any variable.
    #[error("No variables parseable from query")]
    NoVariables,
    /// A projected variable that does not occur in the constraint expression.
    #[error("Failed to constrain all variables: ${0} not constrained in WHERE or GIVEN clauses")]
    UnconstrainedVariable(String),
    /// Transitive and walk constraints can not be scoped to a model.
    #[error("Illegal in clause on transitive constraint.")]
    IllegalInClauseOnTransitive,
    /// A having clause that combines more than one constraint.
    #[error("Having currently supports only one constraint")]
    MultipleHavingConstraints,
    /// A having clause with a predicate outside the `occurs` family.
    #[error("Only \"occurs\" predicates can be used in a Having clause")]
    NonOccursHavingPredicate,
    /// A triple or constraint with a literal in subject or predicate position.
    #[error("Subject or Predicate cannot be a literal")]
    LiteralSubjectOrPredicate,
    /// A statement whose predicate is a variable placeholder.
    #[error("Predicate must be a valid URI")]
    InvalidPredicate,
    /// Deleting statements that contain variables.
    #[error("Cannot use variables when deleting statements")]
    VariablesInDeletion,
    /// Inserting or deleting the content of a whole model.
    #[error("Models cannot be inserted into or deleted from other models")]
    ModelAsStatementSource,
    /// A parse-only request for a command that is not a query.
    #[error("Not a query command: {0}")]
    NotAQuery(String),
}
