//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Author columns as they come out of a LEFT JOIN on authors
#[derive(Debug, Clone, FromRow)]
pub struct AuthorModel {
    #[sqlx(rename = "author_name")]
    pub name: Option<String>,
    #[sqlx(rename = "author_username")]
    pub username: Option<String>,
    #[sqlx(rename = "author_avatar_url")]
    pub avatar_url: Option<String>,
    #[sqlx(rename = "author_created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Post row joined with its author
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthorModel {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub cover_url: Option<String>,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub author: AuthorModel,
}

/// Full `authors` row
#[derive(Debug, Clone, FromRow)]
pub struct AuthorRowModel {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Database model for tags table
#[derive(Debug, Clone, FromRow)]
pub struct TagModel {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// A tag keyed by the post it is attached to
#[derive(Debug, Clone, FromRow)]
pub struct PostTagModel {
    pub post_id: i64,
    #[sqlx(flatten)]
    pub tag: TagModel,
}

/// Bookmark row joined with its post and the post's author
#[derive(Debug, Clone, FromRow)]
pub struct BookmarkedPostModel {
    pub bookmark_author_id: Uuid,
    pub bookmarked_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub post: PostWithAuthorModel,
}
