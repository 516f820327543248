//! Axum extractors for request handling

mod auth;
mod pagination;
mod path;

pub use auth::{CurrentViewer, OptionalViewer};
pub use pagination::Pagination;
pub use path::{PostPath, TagPath};
