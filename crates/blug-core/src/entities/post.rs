//! Post entity and the snapshots embedded alongside it

use chrono::{DateTime, Utc};

use super::{Author, Bookmark, Comment, Like, Tag};
use crate::value_objects::{AuthorId, PostId};

/// A published article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub cover_url: Option<String>,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    /// Ordered by name
    pub tags: Vec<Tag>,
}

/// The reaction rows embedded in a post read
///
/// Point-in-time snapshot: counts and flags are derived from it once and
/// never refreshed implicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostReactions {
    pub likes: Vec<Like>,
    pub bookmarks: Vec<Bookmark>,
    pub comments: Vec<Comment>,
}

impl PostReactions {
    /// Number of likes in the snapshot
    #[inline]
    pub fn like_count(&self) -> u32 {
        u32::try_from(self.likes.len()).unwrap_or(u32::MAX)
    }

    /// Whether the given author has a like row
    pub fn liked_by(&self, author_id: AuthorId) -> bool {
        self.likes.iter().any(|like| like.author_id == author_id)
    }

    /// Whether the given author has a bookmark row
    pub fn bookmarked_by(&self, author_id: AuthorId) -> bool {
        self.bookmarks
            .iter()
            .any(|bookmark| bookmark.author_id == author_id)
    }

    #[inline]
    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

/// A post joined with its author and reaction rows (post page read)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithReactions {
    pub post: Post,
    pub author: Option<Author>,
    pub reactions: PostReactions,
}

/// A post joined with its author (feed, profile, tag and dashboard rows)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Option<Author>,
}

/// A bookmark joined with the post it points at (reading list row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkedPost {
    pub bookmark: Bookmark,
    pub post: Post,
    pub author: Option<Author>,
}

/// An author and the posts they wrote, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorPosts {
    pub author: Author,
    pub posts: Vec<PostWithAuthor>,
}

/// A tag and the posts carrying it, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedPosts {
    pub tag: Tag,
    pub posts: Vec<PostWithAuthor>,
}
