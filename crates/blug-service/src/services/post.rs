//! Post service
//!
//! Post page data, the reaction actions behind its like/bookmark controls,
//! and the public post listings (latest posts, posts by tag).

use blug_core::panel::{ReactionAxis, ReactionIntent};
use blug_core::{PostId, PostReactions, Viewer};
use tracing::{debug, info, instrument};

use crate::dto::{
    PostPageResponse, PostResponse, PostSummaryResponse, PostWithDetails, ReactionActionResponse,
    ReactionStateResponse, TagPostsResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::{notification_channel, Notifier};
use super::reaction::ReactionController;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post page: the post and the viewer's panel seeded from the embedded snapshot
    #[instrument(skip(self))]
    pub async fn get_post_page(&self, slug: &str, viewer: Viewer) -> ServiceResult<PostPageResponse> {
        let page = self
            .ctx
            .post_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", slug))?;

        let (notifier, _) = notification_channel();
        let controller = self.controller_from_snapshot(page.post.id, &page.reactions, viewer, notifier);

        Ok(PostPageResponse {
            post: PostResponse::from(PostWithDetails {
                post: &page.post,
                author: page.author.as_ref(),
                comments: &page.reactions.comments,
            }),
            reactions: ReactionStateResponse::from((page.post.id, controller.state())),
        })
    }

    /// Reaction panel for a bare post id
    ///
    /// Reads the reactions itself and falls back to the empty panel when the
    /// read fails.
    #[instrument(skip(self))]
    pub async fn get_reactions(&self, post_id: PostId, viewer: Viewer) -> ReactionStateResponse {
        let (notifier, _) = notification_channel();
        let controller =
            ReactionController::load(post_id, viewer, self.ctx.reaction_store_handle(), notifier).await;

        ReactionStateResponse::from((post_id, controller.state()))
    }

    /// Apply one like/unlike/bookmark/unbookmark for the viewer
    ///
    /// # Errors
    /// Fails when the post does not exist or its reactions cannot be read.
    /// Store mutation failures are not errors: they come back as a
    /// `Reverted` outcome with an error notification.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        post_id: PostId,
        viewer: Viewer,
        axis: ReactionAxis,
        intent: ReactionIntent,
    ) -> ServiceResult<ReactionActionResponse> {
        let reactions = self.ctx.reaction_store().fetch_post_reactions(post_id).await?;

        let (notifier, mut notifications) = notification_channel();
        let controller = self.controller_from_snapshot(post_id, &reactions, viewer, notifier);

        let outcome = match (axis, intent) {
            (ReactionAxis::Like, ReactionIntent::Add) => controller.like().await,
            (ReactionAxis::Like, ReactionIntent::Remove) => controller.unlike().await,
            (ReactionAxis::Bookmark, ReactionIntent::Add) => controller.bookmark().await,
            (ReactionAxis::Bookmark, ReactionIntent::Remove) => controller.unbookmark().await,
        };

        info!(post_id = %post_id, axis = %axis, outcome = ?outcome, "Reaction request handled");

        Ok(ReactionActionResponse {
            outcome,
            reactions: ReactionStateResponse::from((post_id, controller.state())),
            notifications: notifications.drain(),
        })
    }

    /// The latest posts, newest first
    #[instrument(skip(self))]
    pub async fn list_recent(&self, limit: u32) -> ServiceResult<Vec<PostSummaryResponse>> {
        let posts = self.ctx.post_repo().list_recent(limit).await?;
        debug!(count = posts.len(), "Feed loaded");

        Ok(posts.into_iter().map(PostSummaryResponse::from).collect())
    }

    /// A tag and its posts, newest first
    #[instrument(skip(self))]
    pub async fn get_posts_by_tag(&self, tag_id: i64) -> ServiceResult<TagPostsResponse> {
        let tagged = self
            .ctx
            .post_repo()
            .find_by_tag(tag_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tag", tag_id.to_string()))?;

        Ok(TagPostsResponse::from(tagged))
    }

    fn controller_from_snapshot(
        &self,
        post_id: PostId,
        reactions: &PostReactions,
        viewer: Viewer,
        notifier: Notifier,
    ) -> ReactionController {
        ReactionController::from_snapshot(post_id, reactions, viewer, self.ctx.reaction_store_handle(), notifier)
            .with_login_path(self.ctx.login_path())
    }
}
