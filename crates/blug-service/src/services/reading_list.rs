//! Reading list service
//!
//! The posts a signed-in viewer has bookmarked.

use blug_core::Viewer;
use tracing::{debug, instrument};

use crate::dto::BookmarkResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reading list service
pub struct ReadingListService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReadingListService<'a> {
    /// Create a new ReadingListService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The viewer's saved posts, most recently saved first
    #[instrument(skip(self))]
    pub async fn get_reading_list(&self, viewer: Viewer) -> ServiceResult<Vec<BookmarkResponse>> {
        let author_id = viewer.author_id().ok_or(ServiceError::AuthRequired)?;

        let entries = self.ctx.post_repo().find_bookmarked_by(author_id).await?;
        debug!(author_id = %author_id, count = entries.len(), "Reading list loaded");

        Ok(entries.into_iter().map(BookmarkResponse::from).collect())
    }
}
