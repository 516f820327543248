//! Test fixtures
//!
//! Seeds authors and posts straight into the database (the API only writes
//! reactions) and mirrors the API's JSON shapes.

use anyhow::Result;
use blug_common::JwtService;
use blug_core::{AuthorId, PostId};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// A seeded author and an access token for them
#[derive(Debug, Clone)]
pub struct TestAuthor {
    pub id: AuthorId,
    pub token: String,
}

impl TestAuthor {
    /// Insert an author row and issue a token signed with `JWT_SECRET`
    pub async fn create(pool: &PgPool) -> Result<Self> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO authors (id, name, username) VALUES ($1, $2, $3)")
            .bind(id)
            .bind("Integration Author")
            .bind(format!("it_{}", id.simple()))
            .execute(pool)
            .await?;

        let id = AuthorId::new(id);
        let secret = std::env::var("JWT_SECRET")?;
        let token = JwtService::new(&secret).issue_access_token(id, 900)?;

        Ok(Self { id, token })
    }

    /// Remove the author; posts and reaction rows cascade
    pub async fn delete(&self, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(self.id.into_inner())
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// A seeded post
#[derive(Debug, Clone)]
pub struct TestPost {
    pub id: PostId,
    pub slug: String,
}

impl TestPost {
    /// Insert a post written by `author`
    pub async fn create(pool: &PgPool, author: &TestAuthor) -> Result<Self> {
        let slug = format!("it-post-{}", Uuid::new_v4().simple());
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (slug, title, markdown, author_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&slug)
        .bind("Integration Post")
        .bind("# Hello")
        .bind(author.id.into_inner())
        .fetch_one(pool)
        .await?;

        Ok(Self {
            id: PostId::new(id),
            slug,
        })
    }

    pub fn reactions_path(&self) -> String {
        format!("/api/v1/posts/{}/reactions", self.id)
    }

    pub fn likes_path(&self) -> String {
        format!("/api/v1/posts/{}/likes/@me", self.id)
    }

    pub fn bookmarks_path(&self) -> String {
        format!("/api/v1/posts/{}/bookmarks/@me", self.id)
    }
}

/// Reaction panel
#[derive(Debug, Deserialize)]
pub struct ReactionState {
    pub post_id: i64,
    pub liked: bool,
    pub like_count: u32,
    pub bookmarked: bool,
    pub has_comments: bool,
}

/// User-facing notification
#[derive(Debug, Deserialize)]
pub struct NotificationBody {
    pub kind: String,
    pub message: String,
    pub action: Option<ActionBody>,
}

#[derive(Debug, Deserialize)]
pub struct ActionBody {
    pub label: String,
    pub href: String,
}

/// Like/bookmark action result
#[derive(Debug, Deserialize)]
pub struct ReactionAction {
    pub outcome: String,
    pub reactions: ReactionState,
    pub notifications: Vec<NotificationBody>,
}

/// Post page
#[derive(Debug, Deserialize)]
pub struct PostPage {
    pub post: PostBody,
    pub reactions: ReactionState,
}

#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub id: i64,
    pub slug: String,
    pub title: String,
}

/// Post listing entry (feed, author profile, tag page, dashboard)
#[derive(Debug, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub slug: String,
    pub tags: Vec<TagBody>,
}

#[derive(Debug, Deserialize)]
pub struct TagBody {
    pub id: i64,
    pub name: String,
}

/// Dashboard
#[derive(Debug, Deserialize)]
pub struct Dashboard {
    pub post_count: usize,
    pub comment_count: u64,
    pub posts: Vec<PostSummary>,
}

/// Reading list entry
#[derive(Debug, Deserialize)]
pub struct ReadingListEntry {
    pub post: PostBody,
    pub bookmarked_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
