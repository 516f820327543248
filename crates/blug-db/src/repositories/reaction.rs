//! PostgreSQL implementation of ReactionStore

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use blug_core::entities::{Bookmark, Comment, Like, PostReactions};
use blug_core::error::DomainError;
use blug_core::traits::{ReactionStore, RepoResult};
use blug_core::value_objects::{AuthorId, PostId};

use crate::models::{BookmarkModel, CommentModel, LikeModel};

use super::error::{map_db_error, map_reaction_insert_error, post_not_found};

/// PostgreSQL implementation of ReactionStore
#[derive(Clone)]
pub struct PgReactionStore {
    pool: PgPool,
}

impl PgReactionStore {
    /// Create a new PgReactionStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Begin a read-only transaction so several reads see one snapshot
pub(super) async fn begin_snapshot(pool: &PgPool) -> RepoResult<Transaction<'_, Postgres>> {
    let mut tx = pool.begin().await.map_err(map_db_error)?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;
    Ok(tx)
}

/// Load the like, bookmark and comment rows of one post on `conn`
///
/// Comments come back newest first.
pub(super) async fn load_reactions(conn: &mut PgConnection, post_id: i64) -> RepoResult<PostReactions> {
    let likes = sqlx::query_as::<_, LikeModel>(
        r#"
        SELECT post_id, author_id, created_at
        FROM likes
        WHERE post_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(post_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    let bookmarks = sqlx::query_as::<_, BookmarkModel>(
        r#"
        SELECT post_id, author_id, created_at
        FROM bookmarks
        WHERE post_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(post_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    let comments = sqlx::query_as::<_, CommentModel>(
        r#"
        SELECT id, post_id, author_id, comment, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    Ok(PostReactions {
        likes: likes.into_iter().map(Like::from).collect(),
        bookmarks: bookmarks.into_iter().map(Bookmark::from).collect(),
        comments: comments.into_iter().map(Comment::from).collect(),
    })
}

#[async_trait]
impl ReactionStore for PgReactionStore {
    #[instrument(skip(self))]
    async fn insert_like(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO likes (post_id, author_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(post_id.into_inner())
        .bind(author_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_reaction_insert_error(e, post_id, || DomainError::LikeAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_like(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM likes WHERE post_id = $1 AND author_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(author_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            debug!(post_id = %post_id, "No like row matched");
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn insert_bookmark(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO bookmarks (post_id, author_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(post_id.into_inner())
        .bind(author_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_reaction_insert_error(e, post_id, || DomainError::BookmarkAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_bookmark(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks WHERE post_id = $1 AND author_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(author_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            debug!(post_id = %post_id, "No bookmark row matched");
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_post_reactions(&self, post_id: PostId) -> RepoResult<PostReactions> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if !exists {
            return Err(post_not_found(post_id));
        }

        let reactions = load_reactions(&mut *tx, post_id.into_inner()).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(reactions)
    }
}
