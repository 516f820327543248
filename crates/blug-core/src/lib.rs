//! # blug-core
//!
//! Domain layer containing ids, entities, the reaction state machine, and the
//! store traits implemented by the backend.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod panel;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Author, AuthorPosts, Bookmark, BookmarkedPost, Comment, Like, Post, PostReactions,
    PostWithAuthor, PostWithReactions, Tag, TaggedPosts,
};
pub use error::DomainError;
pub use panel::{AxisState, BeginRejection, ReactionAxis, ReactionIntent, ReactionPanel, ReactionViewState};
pub use traits::{PostRepository, ReactionStore, RepoResult};
pub use value_objects::{AuthorId, IdParseError, PostId, Viewer};
