use crate::syntax::{QueryNode, SetOfTriplesNode};

/// The commands that are turned into queries or graph modifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandNode {
    /// `select ...`
    Select(QueryNode),
    /// `alias <target> as prefix`
    Alias { prefix: String, target: String },
    /// `insert triples into <graph>`
    Insert {
        triples: SetOfTriplesNode,
        graph: String,
    },
    /// `delete triples from <graph>`
    Delete {
        triples: SetOfTriplesNode,
        graph: String,
    },
    /// `create <graph> [<type>]`
    Create {
        graph: String,
        graph_type: Option<String>,
    },
    /// `drop <graph>`
    Drop { graph: String },
}

impl CommandNode {
    /// The keyword that starts the command.
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandNode::Select(_) => "select",
            CommandNode::Alias { .. } => "alias",
            CommandNode::Insert { .. } => "insert",
            CommandNode::Delete { .. } => "delete",
            CommandNode::Create { .. } => "create",
            CommandNode::Drop { .. } => "drop",
        }
    }
}
