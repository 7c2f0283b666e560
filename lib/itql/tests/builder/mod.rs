//! Builds queries and commands from hand-written syntax trees, as the ITQL parser would produce
//! them, and asserts on their rendering.

mod constraint_builder;
mod query_builder;
mod statements;
mod test_utils;
