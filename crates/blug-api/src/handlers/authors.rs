//! Author handlers

use axum::{
    extract::{Path, State},
    Json,
};
use blug_service::{AuthorProfileResponse, AuthorService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Get an author's profile and posts
///
/// GET /authors/{username}
pub async fn get_author(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<AuthorProfileResponse>> {
    let service = AuthorService::new(state.service_context());
    let response = service.get_profile(&username).await?;
    Ok(Json(response))
}
