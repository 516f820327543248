//! Author service
//!
//! Public author profiles.

use tracing::instrument;

use crate::dto::AuthorProfileResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Author service
pub struct AuthorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthorService<'a> {
    /// Create a new AuthorService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// An author's profile and their posts, newest first
    #[instrument(skip(self))]
    pub async fn get_profile(&self, username: &str) -> ServiceResult<AuthorProfileResponse> {
        let profile = self
            .ctx
            .post_repo()
            .find_by_author_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("Author", username))?;

        Ok(AuthorProfileResponse::from(profile))
    }
}
