//! Post handlers
//!
//! The latest posts, the post page and its reaction panel.

use axum::{
    extract::{Path, State},
    Json,
};
use blug_service::{PostPageResponse, PostService, PostSummaryResponse, ReactionStateResponse};

use crate::extractors::{OptionalViewer, Pagination, PostPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List the latest posts, newest first
///
/// GET /posts?limit=20
pub async fn list_posts(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<PostSummaryResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.list_recent(pagination.limit).await?;
    Ok(Json(response))
}

/// Get a post by slug with the viewer's reaction panel
///
/// GET /posts/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    OptionalViewer(viewer): OptionalViewer,
    Path(path): Path<PostPath>,
) -> ApiResult<Json<PostPageResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get_post_page(path.slug(), viewer).await?;
    Ok(Json(response))
}

/// Get the viewer's reaction panel for a post
///
/// GET /posts/{post_id}/reactions
pub async fn get_post_reactions(
    State(state): State<AppState>,
    OptionalViewer(viewer): OptionalViewer,
    Path(path): Path<PostPath>,
) -> ApiResult<Json<ReactionStateResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    Ok(Json(service.get_reactions(post_id, viewer).await))
}
