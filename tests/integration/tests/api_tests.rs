//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health", None).await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready", None).await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Post Page Tests
// ============================================================================

#[tokio::test]
async fn test_post_page_by_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestAuthor::create(&server.pool).await.unwrap();
    let post = TestPost::create(&server.pool, &author).await.unwrap();

    let path = format!("/api/v1/posts/{}", post.slug);
    let response = server.get(&path, None).await.unwrap();
    let page: PostPage = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.post.id, post.id.into_inner());
    assert_eq!(page.post.slug, post.slug);
    assert_eq!(page.reactions.like_count, 0);
    assert!(!page.reactions.liked);
    assert!(!page.reactions.has_comments);

    author.delete(&server.pool).await.unwrap();
}

#[tokio::test]
async fn test_post_page_unknown_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/posts/definitely-not-a-real-post", None)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "NOT_FOUND");
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_and_unlike() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestAuthor::create(&server.pool).await.unwrap();
    let post = TestPost::create(&server.pool, &author).await.unwrap();

    let response = server.put(&post.likes_path(), Some(&author.token)).await.unwrap();
    let action: ReactionAction = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(action.outcome, "confirmed");
    assert!(action.reactions.liked);
    assert_eq!(action.reactions.like_count, 1);
    assert!(action.notifications.is_empty());

    // Persisted: a fresh read sees the like
    let response = server.get(&post.reactions_path(), Some(&author.token)).await.unwrap();
    let state: ReactionState = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.post_id, post.id.into_inner());
    assert!(state.liked);
    assert_eq!(state.like_count, 1);

    let response = server.delete(&post.likes_path(), Some(&author.token)).await.unwrap();
    let action: ReactionAction = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(action.outcome, "confirmed");
    assert!(!action.reactions.liked);
    assert_eq!(action.reactions.like_count, 0);

    author.delete(&server.pool).await.unwrap();
}

#[tokio::test]
async fn test_repeated_like_keeps_one_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestAuthor::create(&server.pool).await.unwrap();
    let post = TestPost::create(&server.pool, &author).await.unwrap();

    server.put(&post.likes_path(), Some(&author.token)).await.unwrap();
    let response = server.put(&post.likes_path(), Some(&author.token)).await.unwrap();
    let action: ReactionAction = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(action.outcome, "redundant");

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id = $1 AND author_id = $2")
        .bind(post.id.into_inner())
        .bind(author.id.into_inner())
        .fetch_one(&server.pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    author.delete(&server.pool).await.unwrap();
}

#[tokio::test]
async fn test_anonymous_like_prompts_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestAuthor::create(&server.pool).await.unwrap();
    let post = TestPost::create(&server.pool, &author).await.unwrap();

    let response = server.put(&post.likes_path(), None).await.unwrap();
    let action: ReactionAction = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(action.outcome, "auth_required");
    assert_eq!(action.notifications.len(), 1);
    let notification = &action.notifications[0];
    assert_eq!(notification.kind, "info");
    assert_eq!(notification.message, "You must be logged in to like a post");
    let cta = notification.action.as_ref().unwrap();
    assert_eq!(cta.label, "Go login");
    assert_eq!(cta.href, "/login");

    author.delete(&server.pool).await.unwrap();
}

#[tokio::test]
async fn test_like_unknown_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestAuthor::create(&server.pool).await.unwrap();

    let response = server
        .put("/api/v1/posts/9223372036854775807/likes/@me", Some(&author.token))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    author.delete(&server.pool).await.unwrap();
}

// ============================================================================
// Bookmark Tests
// ============================================================================

#[tokio::test]
async fn test_bookmarks_fill_reading_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestAuthor::create(&server.pool).await.unwrap();
    let first = TestPost::create(&server.pool, &author).await.unwrap();
    let second = TestPost::create(&server.pool, &author).await.unwrap();

    for post in [&first, &second] {
        let response = server.put(&post.bookmarks_path(), Some(&author.token)).await.unwrap();
        let action: ReactionAction = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(action.reactions.bookmarked);
    }

    let response = server
        .get("/api/v1/users/@me/bookmarks", Some(&author.token))
        .await
        .unwrap();
    let list: Vec<ReadingListEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].post.slug, second.slug);
    assert_eq!(list[1].post.slug, first.slug);

    let response = server.delete(&first.bookmarks_path(), Some(&author.token)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get("/api/v1/users/@me/bookmarks", Some(&author.token))
        .await
        .unwrap();
    let list: Vec<ReadingListEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.len(), 1);

    author.delete(&server.pool).await.unwrap();
}

#[tokio::test]
async fn test_reading_list_requires_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me/bookmarks", None).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "AUTH_REQUIRED");
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/users/@me/bookmarks", Some("not-a-token"))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "INVALID_TOKEN");
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_feed_lists_new_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestAuthor::create(&server.pool).await.unwrap();
    let post = TestPost::create(&server.pool, &author).await.unwrap();

    let response = server.get("/api/v1/posts?limit=100", None).await.unwrap();
    let feed: Vec<PostSummary> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.len() <= 100);
    assert!(feed.iter().any(|entry| entry.slug == post.slug));

    let response = server.get("/api/v1/posts?limit=-1", None).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_QUERY_PARAMETER");

    author.delete(&server.pool).await.unwrap();
}

#[tokio::test]
async fn test_dashboard_lists_own_posts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestAuthor::create(&server.pool).await.unwrap();
    let other = TestAuthor::create(&server.pool).await.unwrap();
    let post = TestPost::create(&server.pool, &author).await.unwrap();
    TestPost::create(&server.pool, &other).await.unwrap();

    let response = server.get("/api/v1/users/@me/dashboard", None).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "AUTH_REQUIRED");

    let response = server
        .get("/api/v1/users/@me/dashboard", Some(&author.token))
        .await
        .unwrap();
    let dashboard: Dashboard = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(dashboard.post_count, 1);
    assert_eq!(dashboard.comment_count, 0);
    assert_eq!(dashboard.posts[0].id, post.id.into_inner());

    other.delete(&server.pool).await.unwrap();
    author.delete(&server.pool).await.unwrap();
}

#[tokio::test]
async fn test_stale_token_still_reads_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = TestAuthor::create(&server.pool).await.unwrap();
    let post = TestPost::create(&server.pool, &author).await.unwrap();

    let response = server.get(&post.reactions_path(), Some("not-a-token")).await.unwrap();
    let state: ReactionState = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!state.liked);

    let response = server.put(&post.likes_path(), Some("not-a-token")).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "INVALID_TOKEN");

    author.delete(&server.pool).await.unwrap();
}
