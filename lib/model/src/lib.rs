mod command;
mod constraint;
mod element;
mod error;
mod expression;
mod model_expression;
mod query;
pub mod vocab;

pub use command::*;
pub use constraint::*;
pub use element::*;
pub use error::*;
pub use expression::*;
pub use model_expression::*;
pub use query::*;

// Re-export some oxrdf types.
pub use oxiri::{Iri, IriParseError};
pub use oxrdf::{
    BlankNode, BlankNodeRef, Literal, LiteralRef, NamedNode, NamedNodeRef, Subject, Term, Triple,
    Variable, VariableRef,
};
