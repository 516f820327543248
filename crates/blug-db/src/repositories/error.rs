//! Error handling utilities for repositories

use blug_core::error::DomainError;
use blug_core::value_objects::PostId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map an insert failure on a reaction table
///
/// Unique violations become `on_unique`; a dangling `post_id` reference
/// becomes `PostNotFound`.
pub fn map_reaction_insert_error<F>(e: SqlxError, post_id: PostId, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            let on_post = db_err
                .constraint()
                .is_some_and(|name| name.contains("post_id"));
            return if on_post {
                post_not_found(post_id)
            } else {
                DomainError::ValidationError("Unknown author".to_string())
            };
        }
    }
    map_unique_violation(e, on_unique)
}

/// Create a "post not found" error
pub fn post_not_found(id: PostId) -> DomainError {
    DomainError::PostNotFound(id)
}
