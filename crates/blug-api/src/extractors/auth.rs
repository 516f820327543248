//! Viewer extractors
//!
//! Resolve the viewer from an optional `Authorization: Bearer` access token.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use blug_core::Viewer;

use crate::response::ApiError;
use crate::state::AppState;

/// The viewer behind a request
///
/// No authorization header means `Viewer::Anonymous`. A header that is not a
/// bearer token, or a token that fails verification, rejects the request.
/// Used where the viewer acts or reads their own data.
#[derive(Debug, Clone, Copy)]
pub struct CurrentViewer(pub Viewer);

/// The viewer behind a read-only request
///
/// Like `CurrentViewer`, but a malformed header or an invalid or expired
/// token reads as `Viewer::Anonymous` so public pages still render.
#[derive(Debug, Clone, Copy)]
pub struct OptionalViewer(pub Viewer);

async fn resolve<S>(parts: &mut Parts, state: &S) -> Result<Viewer, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let token = match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
        Ok(TypedHeader(Authorization(bearer))) => Some(bearer),
        Err(rejection) if rejection.is_missing() => None,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Malformed authorization header");
            return Err(ApiError::InvalidAuthFormat);
        }
    };

    let app_state = AppState::from_ref(state);
    let viewer = app_state
        .jwt_service()
        .resolve_viewer(token.as_ref().map(Bearer::token))?;

    Ok(viewer)
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentViewer
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let viewer = resolve(parts, state).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected viewer credentials");
        })?;

        Ok(CurrentViewer(viewer))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalViewer
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let viewer = resolve(parts, state).await.unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Unusable credentials on a read, treating as anonymous");
            Viewer::Anonymous
        });

        Ok(OptionalViewer(viewer))
    }
}
