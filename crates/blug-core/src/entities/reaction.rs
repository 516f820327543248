//! Like and bookmark entities
//!
//! Both are join rows between a post and an author. The backend enforces
//! at most one row per `(post_id, author_id)` pair for each table.

use chrono::{DateTime, Utc};

use crate::value_objects::{AuthorId, PostId};

/// A viewer liking a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub post_id: PostId,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new Like stamped with the current time
    pub fn new(post_id: PostId, author_id: AuthorId) -> Self {
        Self {
            post_id,
            author_id,
            created_at: Utc::now(),
        }
    }
}

/// A viewer saving a post to their reading list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub post_id: PostId,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Create a new Bookmark stamped with the current time
    pub fn new(post_id: PostId, author_id: AuthorId) -> Self {
        Self {
            post_id,
            author_id,
            created_at: Utc::now(),
        }
    }
}
