use crate::{Iri, NamedNode, Query, Triple};
use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter};

/// A fully built ITQL command, ready to be handed to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `select ...`
    Query(Query),
    /// `alias <namespace> as prefix`
    Alias { prefix: String, namespace: Iri<String> },
    /// `insert ... into <graph>`
    Insertion(Modification),
    /// `delete ... from <graph>`
    Deletion(Modification),
    /// `create <graph> [<type>]`
    CreateGraph { graph: NamedNode, graph_type: NamedNode },
    /// `drop <graph>`
    DropGraph { graph: NamedNode },
}

/// The target and content of an insertion or a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    pub graph: NamedNode,
    pub source: ModificationSource,
}

/// Where the statements of a [Modification] come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModificationSource {
    /// Statements given literally.
    Statements(FxHashSet<Triple>),
    /// The rows of a `select $s $p $o ...` query.
    Query(Box<Query>),
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Query(query) => query.fmt(f),
            Command::Alias { prefix, namespace } => write!(f, "alias <{namespace}> as {prefix}"),
            Command::Insertion(modification) => write!(
                f,
                "insert {} into {}",
                modification.source, modification.graph
            ),
            Command::Deletion(modification) => write!(
                f,
                "delete {} from {}",
                modification.source, modification.graph
            ),
            Command::CreateGraph { graph, graph_type } => write!(f, "create {graph} {graph_type}"),
            Command::DropGraph { graph } => write!(f, "drop {graph}"),
        }
    }
}

impl Display for ModificationSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModificationSource::Statements(triples) => {
                write!(f, "{} statements", triples.len())
            }
            ModificationSource::Query(query) => query.fmt(f),
        }
    }
}
