use crate::vocab::{mulgara, tucana};
use crate::{ConstraintElement, QueryError, QueryResult, Variable};
use std::fmt::{Display, Formatter};

/// The flavour of a leaf constraint, derived from its predicate.
///
/// Most constraints are [ConstraintKind::Plain] triple patterns. The special predicates of the
/// Mulgara namespace (also accepted in the legacy Tucana namespace) are resolved differently by
/// the query engine and are therefore tagged here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Plain,
    /// `mulgara:is`
    Is,
    /// `mulgara:occurs`
    Occurs,
    /// `mulgara:notOccurs`
    NotOccurs,
    /// `mulgara:occursLessThan`
    OccursLessThan,
    /// `mulgara:occursMoreThan`
    OccursMoreThan,
}

impl ConstraintKind {
    /// Determines the kind of constraint that uses `predicate`.
    pub fn for_predicate(predicate: &ConstraintElement) -> Self {
        let Some(uri) = predicate.as_uri_reference() else {
            return ConstraintKind::Plain;
        };

        let local_name = [mulgara::NAMESPACE, tucana::NAMESPACE]
            .iter()
            .find_map(|namespace| uri.as_str().strip_prefix(namespace));
        match local_name {
            Some("is") => ConstraintKind::Is,
            Some("occurs") => ConstraintKind::Occurs,
            Some("notOccurs") => ConstraintKind::NotOccurs,
            Some("occursLessThan") => ConstraintKind::OccursLessThan,
            Some("occursMoreThan") => ConstraintKind::OccursMoreThan,
            _ => ConstraintKind::Plain,
        }
    }

    /// Whether constraints of this kind may appear in a having clause.
    pub fn is_having(self) -> bool {
        matches!(
            self,
            ConstraintKind::Occurs | ConstraintKind::OccursLessThan | ConstraintKind::OccursMoreThan
        )
    }
}

/// A leaf constraint: a triple pattern, optionally scoped to a model (`in <model>`).
///
/// The subject and the predicate are never literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintPattern {
    kind: ConstraintKind,
    subject: ConstraintElement,
    predicate: ConstraintElement,
    object: ConstraintElement,
    model: Option<ConstraintElement>,
}

impl ConstraintPattern {
    /// Creates a new pattern that is resolved against the models of the query.
    pub fn try_new(
        subject: ConstraintElement,
        predicate: ConstraintElement,
        object: ConstraintElement,
    ) -> QueryResult<Self> {
        Self::try_create(subject, predicate, object, None)
    }

    /// Creates a new pattern that is resolved against `model` only.
    pub fn try_new_in_model(
        subject: ConstraintElement,
        predicate: ConstraintElement,
        object: ConstraintElement,
        model: ConstraintElement,
    ) -> QueryResult<Self> {
        Self::try_create(subject, predicate, object, Some(model))
    }

    fn try_create(
        subject: ConstraintElement,
        predicate: ConstraintElement,
        object: ConstraintElement,
        model: Option<ConstraintElement>,
    ) -> QueryResult<Self> {
        if subject.is_literal() || predicate.is_literal() {
            return Err(QueryError::LiteralSubjectOrPredicate);
        }

        Ok(Self {
            kind: ConstraintKind::for_predicate(&predicate),
            subject,
            predicate,
            object,
            model,
        })
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn subject(&self) -> &ConstraintElement {
        &self.subject
    }

    pub fn predicate(&self) -> &ConstraintElement {
        &self.predicate
    }

    pub fn object(&self) -> &ConstraintElement {
        &self.object
    }

    /// The model of an `in` clause, if present.
    pub fn model(&self) -> Option<&ConstraintElement> {
        self.model.as_ref()
    }

    /// Iterates over the variables of all positions, in subject-predicate-object-model order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        [&self.subject, &self.predicate, &self.object]
            .into_iter()
            .chain(self.model.as_ref())
            .filter_map(ConstraintElement::as_variable)
    }
}

impl Display for ConstraintPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(model) = &self.model {
            write!(f, " in {model}")?;
        }
        f.write_str("]")
    }
}

/// A constraint: a pattern or the negation of another constraint.
///
/// Negations can only wrap constraints, never compound expressions. Negating twice produces two
/// nested negations; they do not cancel out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    Pattern(ConstraintPattern),
    Negation(Box<Constraint>),
}

impl Constraint {
    #[must_use]
    pub fn negate(self) -> Self {
        Constraint::Negation(Box::new(self))
    }

    /// Returns the innermost pattern.
    pub fn pattern(&self) -> &ConstraintPattern {
        match self {
            Constraint::Pattern(pattern) => pattern,
            Constraint::Negation(inner) => inner.pattern(),
        }
    }

    pub fn is_negated(&self) -> bool {
        matches!(self, Constraint::Negation(_))
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.pattern().variables()
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Pattern(pattern) => pattern.fmt(f),
            Constraint::Negation(inner) => write!(f, "not {inner}"),
        }
    }
}

impl From<ConstraintPattern> for Constraint {
    fn from(pattern: ConstraintPattern) -> Self {
        Constraint::Pattern(pattern)
    }
}

/// A constraint that is valid in a having clause, i.e., one of the `occurs` family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintHaving(ConstraintPattern);

impl ConstraintHaving {
    pub fn kind(&self) -> ConstraintKind {
        self.0.kind()
    }

    pub fn pattern(&self) -> &ConstraintPattern {
        &self.0
    }

    pub fn into_pattern(self) -> ConstraintPattern {
        self.0
    }
}

impl TryFrom<ConstraintPattern> for ConstraintHaving {
    type Error = QueryError;

    fn try_from(pattern: ConstraintPattern) -> Result<Self, Self::Error> {
        if pattern.kind().is_having() {
            Ok(Self(pattern))
        } else {
            Err(QueryError::NonOccursHavingPredicate)
        }
    }
}

impl Display for ConstraintHaving {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
