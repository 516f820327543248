//! Dashboard service
//!
//! A signed-in viewer's own posts and how much they have written.

use blug_core::Viewer;
use tracing::{debug, instrument};

use crate::dto::{DashboardResponse, PostSummaryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn get_dashboard(&self, viewer: Viewer) -> ServiceResult<DashboardResponse> {
        let author_id = viewer.author_id().ok_or(ServiceError::AuthRequired)?;

        let posts = self.ctx.post_repo().find_by_author_id(author_id).await?;
        let comment_count = self.ctx.post_repo().count_comments_by(author_id).await?;
        debug!(author_id = %author_id, posts = posts.len(), comment_count, "Dashboard loaded");

        Ok(DashboardResponse {
            post_count: posts.len(),
            comment_count,
            posts: posts.into_iter().map(PostSummaryResponse::from).collect(),
        })
    }
}
