//! Value objects - immutable types that represent domain concepts

mod ids;
mod viewer;

pub use ids::{AuthorId, IdParseError, PostId};
pub use viewer::Viewer;
