//! Like, bookmark, and comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub post_id: i64,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Database model for bookmarks table
#[derive(Debug, Clone, FromRow)]
pub struct BookmarkModel {
    pub post_id: i64,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub post_id: i64,
    pub author_id: Uuid,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
