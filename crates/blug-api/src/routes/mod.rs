//! Route definitions
//!
//! API routes are mounted under /api/v1; health checks sit at the root so
//! they can skip rate limiting.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{authors, health, posts, reactions, tags, users};
use crate::state::AppState;

/// Create the API router (health routes are built separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(author_routes())
        .merge(tag_routes())
        .merge(user_routes())
}

/// Post routes
///
/// `:post` is a slug on the page route and a numeric id everywhere else.
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts))
        .route("/posts/:post", get(posts::get_post))
        .route("/posts/:post/reactions", get(posts::get_post_reactions))
        .route(
            "/posts/:post/likes/@me",
            put(reactions::like_post).delete(reactions::unlike_post),
        )
        .route(
            "/posts/:post/bookmarks/@me",
            put(reactions::bookmark_post).delete(reactions::unbookmark_post),
        )
}

/// Author routes
fn author_routes() -> Router<AppState> {
    Router::new().route("/authors/:username", get(authors::get_author))
}

/// Tag routes
fn tag_routes() -> Router<AppState> {
    Router::new().route("/tags/:tag/posts", get(tags::get_tag_posts))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me/bookmarks", get(users::get_reading_list))
        .route("/users/@me/dashboard", get(users::get_dashboard))
}
