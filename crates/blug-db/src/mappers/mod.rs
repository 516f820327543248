//! Model to entity mappers
//!
//! Conversions from database rows (blug-db models) to domain entities (blug-core).

mod post;
mod reaction;

pub use post::author_from_join;
