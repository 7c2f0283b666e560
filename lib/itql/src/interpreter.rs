use crate::alias::parse_iri;
use crate::server_info::canonicalize_graph_uri;
use crate::statements::{to_statements, Statements};
use crate::syntax::{
    CommandNode, ConstraintExpressionNode, SelectNode, SetOfTriplesNode, TripleNode,
};
use crate::{AliasMap, InterpreterConfig, ItqlResult, QueryBuilder, ServerInfo};
use mulgara_model::vocab::mulgara;
use mulgara_model::{
    Command, ConstraintExpression, ConstraintHaving, Iri, Modification, ModificationSource,
    NamedNode, Query, QueryError,
};
use std::sync::Arc;

/// Turns parsed ITQL commands into [Command]s.
///
/// The interpreter does not execute anything. It owns the state that outlives a single command:
/// the aliases and the most recently built query.
#[derive(Debug, Default)]
pub struct ItqlInterpreter {
    aliases: AliasMap,
    server_info: Option<Arc<dyn ServerInfo>>,
    last_query: Option<Query>,
}

impl ItqlInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            aliases: config.aliases,
            server_info: config.server_info,
            last_query: None,
        }
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    pub fn add_alias(&mut self, prefix: impl Into<String>, namespace: Iri<String>) {
        self.aliases.insert(prefix, namespace);
    }

    /// Builds a query and retains it as the [last query](Self::last_query).
    pub fn build_query(&mut self, select: &SelectNode) -> ItqlResult<Query> {
        let query = QueryBuilder::new(&self.aliases).build_query(select)?;
        Ok(self.retain(query))
    }

    fn retain(&mut self, query: Query) -> Query {
        self.last_query = Some(query.clone());
        query
    }

    /// Builds the expression of a `where` clause.
    pub fn build(&self, expression: &ConstraintExpressionNode) -> ItqlResult<ConstraintExpression> {
        QueryBuilder::new(&self.aliases).build_constraint(expression)
    }

    /// Builds a `having` clause.
    pub fn build_having(
        &self,
        expression: &ConstraintExpressionNode,
    ) -> ItqlResult<ConstraintHaving> {
        QueryBuilder::new(&self.aliases).build_having(expression)
    }

    /// Materializes a literal set of triples.
    pub fn to_statements(&self, triples: &[TripleNode]) -> ItqlResult<Statements> {
        to_statements(triples, &self.aliases)
    }

    /// Builds the query of a `select` command without executing it.
    pub fn parse_query(&mut self, command: &CommandNode) -> ItqlResult<Query> {
        match command {
            CommandNode::Select(query) => {
                let query = QueryBuilder::new(&self.aliases).build_select(query)?;
                Ok(self.retain(query))
            }
            other => Err(QueryError::NotAQuery(other.keyword().to_owned()).into()),
        }
    }

    /// The query built most recently.
    pub fn last_query(&self) -> Option<&Query> {
        self.last_query.as_ref()
    }

    /// Turns a command into its model representation.
    ///
    /// `alias` commands take effect immediately, all others are returned for execution.
    pub fn execute(&mut self, command: &CommandNode) -> ItqlResult<Command> {
        self.build_command(command).inspect_err(|error| {
            tracing::warn!("rejected {} command: {error}", command.keyword());
        })
    }

    fn build_command(&mut self, command: &CommandNode) -> ItqlResult<Command> {
        match command {
            CommandNode::Select(_) => Ok(Command::Query(self.parse_query(command)?)),
            CommandNode::Alias { prefix, target } => {
                let namespace = parse_iri(target)?;
                tracing::debug!("aliasing {prefix} to <{namespace}>");
                self.add_alias(prefix.clone(), namespace.clone());
                Ok(Command::Alias {
                    prefix: prefix.clone(),
                    namespace,
                })
            }
            CommandNode::Insert { triples, graph } => Ok(Command::Insertion(Modification {
                graph: self.graph_uri(graph)?,
                source: self.modification_source(triples, false)?,
            })),
            CommandNode::Delete { triples, graph } => Ok(Command::Deletion(Modification {
                graph: self.graph_uri(graph)?,
                source: self.modification_source(triples, true)?,
            })),
            CommandNode::Create { graph, graph_type } => {
                let graph_type = match graph_type {
                    Some(graph_type) => self.aliases.resolve(graph_type)?,
                    None => mulgara::MODEL.into_owned(),
                };
                Ok(Command::CreateGraph {
                    graph: self.graph_uri(graph)?,
                    graph_type,
                })
            }
            CommandNode::Drop { graph } => Ok(Command::DropGraph {
                graph: self.graph_uri(graph)?,
            }),
        }
    }

    fn modification_source(
        &mut self,
        triples: &SetOfTriplesNode,
        deletion: bool,
    ) -> ItqlResult<ModificationSource> {
        match triples {
            SetOfTriplesNode::Triples(triples) => {
                let statements = self.to_statements(triples)?;
                if deletion && !statements.variables.is_empty() {
                    return Err(QueryError::VariablesInDeletion.into());
                }
                Ok(ModificationSource::Statements(statements.triples))
            }
            SetOfTriplesNode::Select(select) => {
                let query = QueryBuilder::new(&self.aliases).build_select_triples(select)?;
                let query = self.retain(query);
                Ok(ModificationSource::Query(Box::new(query)))
            }
            SetOfTriplesNode::Resource(_) => Err(QueryError::ModelAsStatementSource.into()),
        }
    }

    /// Resolves the URI of a graph that is modified, created or dropped.
    ///
    /// Every graph command canonicalizes its graph, not only `create`, so that all of them
    /// address a local graph under the same name.
    fn graph_uri(&self, token: &str) -> ItqlResult<NamedNode> {
        let graph = self.aliases.resolve(token)?;
        Ok(canonicalize_graph_uri(graph, self.server_info.as_deref()))
    }
}
