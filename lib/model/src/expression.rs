use crate::{Constraint, ConstraintPattern, Variable};
use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter};

/// The algebra of a `where` clause.
///
/// Leaves are [Constraint]s. The binary operators are built left-deep by the grammar, so
/// `A and B and C` becomes `Conjunction(Conjunction(A, B), C)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstraintExpression {
    /// A single (possibly negated) constraint.
    Constraint(Constraint),
    /// `lhs and rhs`
    Conjunction(Box<ConstraintExpression>, Box<ConstraintExpression>),
    /// `lhs or rhs`
    Disjunction(Box<ConstraintExpression>, Box<ConstraintExpression>),
    /// `minuend minus subtrahend`
    Difference {
        minuend: Box<ConstraintExpression>,
        subtrahend: Box<ConstraintExpression>,
    },
    /// `trans(pattern)`: the transitive closure over a single predicate.
    SingleTransitive(ConstraintPattern),
    /// `trans(anchor and pattern)`: the transitive closure starting at an anchor.
    Transitive {
        anchor: ConstraintPattern,
        pattern: ConstraintPattern,
    },
    /// `walk(anchor and pattern)`
    Walk {
        anchor: ConstraintPattern,
        pattern: ConstraintPattern,
    },
}

impl ConstraintExpression {
    pub fn conjunction(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ConstraintExpression::Conjunction(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    pub fn disjunction(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ConstraintExpression::Disjunction(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    pub fn difference(minuend: impl Into<Self>, subtrahend: impl Into<Self>) -> Self {
        ConstraintExpression::Difference {
            minuend: Box::new(minuend.into()),
            subtrahend: Box::new(subtrahend.into()),
        }
    }

    /// Whether this is one of the binary operations `and`, `or` and `minus`.
    pub fn is_operation(&self) -> bool {
        matches!(
            self,
            ConstraintExpression::Conjunction(..)
                | ConstraintExpression::Disjunction(..)
                | ConstraintExpression::Difference { .. }
        )
    }

    /// Unwraps a leaf constraint. Returns the expression itself if it is something else.
    pub fn into_constraint(self) -> Result<Constraint, Self> {
        match self {
            ConstraintExpression::Constraint(constraint) => Ok(constraint),
            other => Err(other),
        }
    }

    /// Collects all leaf patterns, including those of transitive and walk constraints.
    pub fn patterns(&self) -> Vec<&ConstraintPattern> {
        let mut patterns = Vec::new();
        self.collect_patterns(&mut patterns);
        patterns
    }

    fn collect_patterns<'a>(&'a self, patterns: &mut Vec<&'a ConstraintPattern>) {
        match self {
            ConstraintExpression::Constraint(constraint) => patterns.push(constraint.pattern()),
            ConstraintExpression::Conjunction(lhs, rhs)
            | ConstraintExpression::Disjunction(lhs, rhs)
            | ConstraintExpression::Difference {
                minuend: lhs,
                subtrahend: rhs,
            } => {
                lhs.collect_patterns(patterns);
                rhs.collect_patterns(patterns);
            }
            ConstraintExpression::SingleTransitive(pattern) => patterns.push(pattern),
            ConstraintExpression::Transitive { anchor, pattern }
            | ConstraintExpression::Walk { anchor, pattern } => {
                patterns.push(anchor);
                patterns.push(pattern);
            }
        }
    }

    /// The variables constrained by this expression.
    pub fn variables(&self) -> FxHashSet<&Variable> {
        self.patterns()
            .into_iter()
            .flat_map(ConstraintPattern::variables)
            .collect()
    }
}

impl Display for ConstraintExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintExpression::Constraint(constraint) => constraint.fmt(f),
            ConstraintExpression::Conjunction(lhs, rhs) => write!(f, "({lhs} and {rhs})"),
            ConstraintExpression::Disjunction(lhs, rhs) => write!(f, "({lhs} or {rhs})"),
            ConstraintExpression::Difference {
                minuend,
                subtrahend,
            } => write!(f, "({minuend} minus {subtrahend})"),
            ConstraintExpression::SingleTransitive(pattern) => write!(f, "trans({pattern})"),
            ConstraintExpression::Transitive { anchor, pattern } => {
                write!(f, "trans({anchor} and {pattern})")
            }
            ConstraintExpression::Walk { anchor, pattern } => {
                write!(f, "walk({anchor} and {pattern})")
            }
        }
    }
}

impl From<Constraint> for ConstraintExpression {
    fn from(constraint: Constraint) -> Self {
        ConstraintExpression::Constraint(constraint)
    }
}

impl From<ConstraintPattern> for ConstraintExpression {
    fn from(pattern: ConstraintPattern) -> Self {
        ConstraintExpression::Constraint(Constraint::Pattern(pattern))
    }
}
