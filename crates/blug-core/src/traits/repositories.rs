//! Repository traits (ports) - define the interface for data access
//!
//! The hosted backend owns every durable row. The domain layer defines what
//! it needs from it, and the infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    AuthorPosts, BookmarkedPost, PostReactions, PostWithAuthor, PostWithReactions, TaggedPosts,
};
use crate::error::DomainError;
use crate::value_objects::{AuthorId, PostId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Store
// ============================================================================

/// Durable like and bookmark rows
#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// Insert a like row
    ///
    /// Fails with `LikeAlreadyExists` if the pair already has one.
    async fn insert_like(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()>;

    /// Delete the like row matching the pair (succeeds when none matches)
    async fn delete_like(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()>;

    /// Insert a bookmark row
    ///
    /// Fails with `BookmarkAlreadyExists` if the pair already has one.
    async fn insert_bookmark(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()>;

    /// Delete the bookmark row matching the pair (succeeds when none matches)
    async fn delete_bookmark(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()>;

    /// Read a post's likes, bookmarks and comments
    async fn fetch_post_reactions(&self, post_id: PostId) -> RepoResult<PostReactions>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by slug with its author and embedded reactions
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<PostWithReactions>>;

    /// List the posts an author bookmarked, newest bookmark first
    async fn find_bookmarked_by(&self, author_id: AuthorId) -> RepoResult<Vec<BookmarkedPost>>;

    /// The latest `limit` posts, newest first
    async fn list_recent(&self, limit: u32) -> RepoResult<Vec<PostWithAuthor>>;

    /// Find an author by username along with their posts
    ///
    /// `None` when no author has that username.
    async fn find_by_author_username(&self, username: &str) -> RepoResult<Option<AuthorPosts>>;

    /// Posts written by an author, newest first
    async fn find_by_author_id(&self, author_id: AuthorId) -> RepoResult<Vec<PostWithAuthor>>;

    /// Find a tag along with the posts carrying it
    ///
    /// `None` when the tag does not exist; a tag with no posts is `Some`.
    async fn find_by_tag(&self, tag_id: i64) -> RepoResult<Option<TaggedPosts>>;

    /// Number of comments an author has written, across all posts
    async fn count_comments_by(&self, author_id: AuthorId) -> RepoResult<u64>;
}
