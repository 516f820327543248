//! User handlers

use axum::{extract::State, Json};
use blug_service::{BookmarkResponse, DashboardResponse, DashboardService, ReadingListService};

use crate::extractors::CurrentViewer;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the viewer's reading list, newest bookmark first
///
/// GET /users/@me/bookmarks
pub async fn get_reading_list(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
) -> ApiResult<Json<Vec<BookmarkResponse>>> {
    let service = ReadingListService::new(state.service_context());
    let response = service.get_reading_list(viewer).await?;
    Ok(Json(response))
}

/// Get the viewer's own posts and writing stats
///
/// GET /users/@me/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
) -> ApiResult<Json<DashboardResponse>> {
    let service = DashboardService::new(state.service_context());
    let response = service.get_dashboard(viewer).await?;
    Ok(Json(response))
}
