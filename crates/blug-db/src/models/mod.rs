//! Database models - SQLx-compatible structs for the backend tables

mod post;
mod reaction;

pub use post::{
    AuthorModel, AuthorRowModel, BookmarkedPostModel, PostTagModel, PostWithAuthorModel, TagModel,
};
pub use reaction::{BookmarkModel, CommentModel, LikeModel};
