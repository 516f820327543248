//! # blug-service
//!
//! Application layer: the optimistic reaction controller, notifications,
//! page services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthorProfileResponse, BookmarkResponse, DashboardResponse, HealthResponse, PostPageResponse,
    PostSummaryResponse, ReactionActionResponse, ReactionStateResponse, ReadinessResponse,
    TagPostsResponse,
};
pub use services::{
    notification_channel, AuthorService, DashboardService, Notification, NotificationKind,
    NotificationStream, Notifier, PostService, ReactionController, ReactionOutcome,
    ReadingListService, RefreshOutcome, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
