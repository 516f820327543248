//! Domain entities - rows owned by the backend

mod author;
mod comment;
mod post;
mod reaction;
mod tag;

pub use author::Author;
pub use comment::Comment;
pub use post::{
    AuthorPosts, BookmarkedPost, Post, PostReactions, PostWithAuthor, PostWithReactions,
    TaggedPosts,
};
pub use reaction::{Bookmark, Like};
pub use tag::Tag;
