//! The ITQL front end of Mulgara.
//!
//! The parser of the ITQL language produces a [syntax] tree. This crate turns that tree into the
//! query model of `mulgara-model`: constraint expressions, model expressions, queries and graph
//! commands. Resource tokens are resolved against the aliases of the [ItqlInterpreter].

mod alias;
mod config;
mod constraint_builder;
mod element;
mod error;
mod interpreter;
mod model_builder;
mod query_builder;
mod server_info;
mod statements;
pub mod syntax;
mod variable_factory;

pub use alias::AliasMap;
pub use config::InterpreterConfig;
pub use constraint_builder::ConstraintExpressionBuilder;
pub use element::{literal_text, to_constraint_element, to_literal};
pub use error::{ItqlError, ItqlResult};
pub use interpreter::ItqlInterpreter;
pub use model_builder::build_model_expression;
pub use query_builder::QueryBuilder;
pub use server_info::{canonicalize_graph_uri, ServerInfo, StaticServerInfo};
pub use statements::{to_statements, Statements};
pub use variable_factory::VariableFactory;
