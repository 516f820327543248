//! Reaction handlers
//!
//! Like and bookmark toggles for the viewer.

use axum::extract::{Path, State};
use blug_core::panel::{ReactionAxis, ReactionIntent};
use blug_core::Viewer;
use blug_service::PostService;

use crate::extractors::{CurrentViewer, PostPath};
use crate::response::{ApiResult, ReactionReply};
use crate::state::AppState;

async fn react(
    state: &AppState,
    viewer: Viewer,
    path: &PostPath,
    axis: ReactionAxis,
    intent: ReactionIntent,
) -> ApiResult<ReactionReply> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.react(post_id, viewer, axis, intent).await?;
    Ok(ReactionReply(response))
}

/// Like a post
///
/// PUT /posts/{post_id}/likes/@me
pub async fn like_post(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
    Path(path): Path<PostPath>,
) -> ApiResult<ReactionReply> {
    react(&state, viewer, &path, ReactionAxis::Like, ReactionIntent::Add).await
}

/// Unlike a post
///
/// DELETE /posts/{post_id}/likes/@me
pub async fn unlike_post(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
    Path(path): Path<PostPath>,
) -> ApiResult<ReactionReply> {
    react(&state, viewer, &path, ReactionAxis::Like, ReactionIntent::Remove).await
}

/// Save a post to the reading list
///
/// PUT /posts/{post_id}/bookmarks/@me
pub async fn bookmark_post(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
    Path(path): Path<PostPath>,
) -> ApiResult<ReactionReply> {
    react(&state, viewer, &path, ReactionAxis::Bookmark, ReactionIntent::Add).await
}

/// Remove a post from the reading list
///
/// DELETE /posts/{post_id}/bookmarks/@me
pub async fn unbookmark_post(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
    Path(path): Path<PostPath>,
) -> ApiResult<ReactionReply> {
    react(&state, viewer, &path, ReactionAxis::Bookmark, ReactionIntent::Remove).await
}
