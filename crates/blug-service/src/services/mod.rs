//! Application services
//!
//! The reaction controller, its notification channel, and the services the
//! HTTP layer calls into.

pub mod author;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod notification;
pub mod post;
pub mod reaction;
pub mod reading_list;

// Re-export all services for convenience
pub use author::AuthorService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
pub use notification::{
    notification_channel, CallToAction, Notification, NotificationKind, NotificationStream, Notifier,
};
pub use post::PostService;
pub use reaction::{ReactionController, ReactionOutcome, RefreshOutcome, DEFAULT_LOGIN_PATH};
pub use reading_list::ReadingListService;
