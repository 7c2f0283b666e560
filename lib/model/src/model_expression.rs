use crate::NamedNode;
use oxiri::Iri;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// The models (graphs) a query is evaluated against, i.e., the `from` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelExpression {
    /// A single model.
    Resource(NamedNode),
    /// `lhs or rhs`
    Union(Box<ModelExpression>, Box<ModelExpression>),
    /// `lhs and rhs`
    Intersection(Box<ModelExpression>, Box<ModelExpression>),
    /// `lhs par rhs`
    Partition(Box<ModelExpression>, Box<ModelExpression>),
}

impl ModelExpression {
    pub fn union(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ModelExpression::Union(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    pub fn intersection(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ModelExpression::Intersection(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    pub fn partition(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ModelExpression::Partition(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    /// Returns the URIs of the servers that host the models of this expression.
    ///
    /// Only `rmi` and `beep` models live on a remote server. The server URI is the model URI
    /// without query and fragment.
    pub fn database_uris(&self) -> BTreeSet<NamedNode> {
        let mut uris = BTreeSet::new();
        self.collect_database_uris(&mut uris);
        uris
    }

    fn collect_database_uris(&self, uris: &mut BTreeSet<NamedNode>) {
        match self {
            ModelExpression::Resource(uri) => uris.extend(database_uri(uri)),
            ModelExpression::Union(lhs, rhs)
            | ModelExpression::Intersection(lhs, rhs)
            | ModelExpression::Partition(lhs, rhs) => {
                lhs.collect_database_uris(uris);
                rhs.collect_database_uris(uris);
            }
        }
    }
}

fn database_uri(model: &NamedNode) -> Option<NamedNode> {
    let iri = Iri::parse(model.as_str()).ok()?;
    if !matches!(iri.scheme(), "rmi" | "beep") {
        return None;
    }

    let database = match iri.authority() {
        Some(authority) => format!("{}://{authority}{}", iri.scheme(), iri.path()),
        None => format!("{}:{}", iri.scheme(), iri.path()),
    };
    Some(NamedNode::new_unchecked(database))
}

impl Display for ModelExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelExpression::Resource(uri) => uri.fmt(f),
            ModelExpression::Union(lhs, rhs) => write!(f, "({lhs} or {rhs})"),
            ModelExpression::Intersection(lhs, rhs) => write!(f, "({lhs} and {rhs})"),
            ModelExpression::Partition(lhs, rhs) => write!(f, "({lhs} par {rhs})"),
        }
    }
}

impl From<NamedNode> for ModelExpression {
    fn from(uri: NamedNode) -> Self {
        ModelExpression::Resource(uri)
    }
}
