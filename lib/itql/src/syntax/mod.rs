//! The syntax tree of ITQL commands.
//!
//! These types are produced by the ITQL parser. Every grammar production is one variant, so
//! the builders can match them exhaustively.

mod command;
mod constraint;
mod element;
mod model;
mod query;

pub use command::*;
pub use constraint::*;
pub use element::*;
pub use model::*;
pub use query::*;
