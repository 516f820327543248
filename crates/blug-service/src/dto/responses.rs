//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Post ids are JSON numbers; author ids are UUID strings.

use blug_core::PostId;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::{Notification, ReactionOutcome};

// ============================================================================
// Author / Post Responses
// ============================================================================

/// Public author card
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Topic label on a post
#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Comment shown under a post
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub author_id: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Full post, as rendered on its page
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
    pub tags: Vec<TagResponse>,
    /// Newest first
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
}

/// Post card used in lists
#[derive(Debug, Clone, Serialize)]
pub struct PostSummaryResponse {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
    pub tags: Vec<TagResponse>,
    pub created_at: DateTime<Utc>,
}

/// Post page: the post plus the viewer's reaction panel
#[derive(Debug, Clone, Serialize)]
pub struct PostPageResponse {
    pub post: PostResponse,
    pub reactions: ReactionStateResponse,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// The viewer's reaction panel for one post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionStateResponse {
    pub post_id: PostId,
    pub liked: bool,
    pub like_count: u32,
    pub bookmarked: bool,
    pub has_comments: bool,
}

/// Result of a like/unlike/bookmark/unbookmark request
#[derive(Debug, Clone, Serialize)]
pub struct ReactionActionResponse {
    pub outcome: ReactionOutcome,
    pub reactions: ReactionStateResponse,
    pub notifications: Vec<Notification>,
}

// ============================================================================
// Reading List Responses
// ============================================================================

/// One saved post in the viewer's reading list
#[derive(Debug, Clone, Serialize)]
pub struct BookmarkResponse {
    pub post: PostSummaryResponse,
    pub bookmarked_at: DateTime<Utc>,
}

// ============================================================================
// Listing Responses
// ============================================================================

/// Author profile page
#[derive(Debug, Clone, Serialize)]
pub struct AuthorProfileResponse {
    pub author: AuthorResponse,
    pub joined_at: DateTime<Utc>,
    /// Newest first
    pub posts: Vec<PostSummaryResponse>,
}

/// Posts carrying one tag
#[derive(Debug, Clone, Serialize)]
pub struct TagPostsResponse {
    pub tag: TagResponse,
    /// Newest first
    pub posts: Vec<PostSummaryResponse>,
}

/// The signed-in viewer's own stats and posts
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub post_count: usize,
    /// Comments the viewer wrote, on any post
    pub comment_count: u64,
    /// Newest first
    pub posts: Vec<PostSummaryResponse>,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
