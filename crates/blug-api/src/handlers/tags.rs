//! Tag handlers

use axum::{
    extract::{Path, State},
    Json,
};
use blug_service::{PostService, TagPostsResponse};

use crate::extractors::TagPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a tag and the posts carrying it
///
/// GET /tags/{tag_id}/posts
pub async fn get_tag_posts(
    State(state): State<AppState>,
    Path(path): Path<TagPath>,
) -> ApiResult<Json<TagPostsResponse>> {
    let tag_id = path.tag_id()?;

    let service = PostService::new(state.service_context());
    let response = service.get_posts_by_tag(tag_id).await?;
    Ok(Json(response))
}
