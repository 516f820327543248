//! Data transfer objects for API responses
//!
//! This module provides:
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod responses;

// Re-export commonly used response types
pub use responses::{
    AuthorProfileResponse, AuthorResponse, BookmarkResponse, CommentResponse, DashboardResponse,
    HealthChecks, HealthResponse, PostPageResponse, PostResponse, PostSummaryResponse,
    ReactionActionResponse, ReactionStateResponse, ReadinessResponse, TagPostsResponse,
    TagResponse,
};

// Re-export mapper helper structs
pub use mappers::PostWithDetails;
