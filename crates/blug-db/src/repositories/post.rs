//! PostgreSQL implementation of PostRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use blug_core::entities::{
    Author, AuthorPosts, BookmarkedPost, PostWithAuthor, PostWithReactions, Tag, TaggedPosts,
};
use blug_core::traits::{PostRepository, RepoResult};
use blug_core::value_objects::AuthorId;

use crate::models::{AuthorRowModel, BookmarkedPostModel, PostTagModel, PostWithAuthorModel, TagModel};

use super::error::map_db_error;
use super::reaction::{begin_snapshot, load_reactions};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Tags of each post in `post_ids`, keyed by post id
async fn load_tags(conn: &mut PgConnection, post_ids: &[i64]) -> RepoResult<HashMap<i64, Vec<Tag>>> {
    let mut by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
    if post_ids.is_empty() {
        return Ok(by_post);
    }

    let rows = sqlx::query_as::<_, PostTagModel>(
        r#"
        SELECT pt.id_post AS post_id, t.id, t.name, t.description
        FROM posts_tags pt
        JOIN tags t ON t.id = pt.id_tag
        WHERE pt.id_post = ANY($1)
        ORDER BY t.name
        "#,
    )
    .bind(post_ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    for row in rows {
        by_post.entry(row.post_id).or_default().push(Tag::from(row.tag));
    }
    Ok(by_post)
}

async fn with_tags(conn: &mut PgConnection, rows: Vec<PostWithAuthorModel>) -> RepoResult<Vec<PostWithAuthor>> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = load_tags(conn, &ids).await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let post_tags = tags.remove(&row.id).unwrap_or_default();
            row.into_entry(post_tags)
        })
        .collect())
}

async fn posts_by_author(conn: &mut PgConnection, author_id: AuthorId) -> RepoResult<Vec<PostWithAuthor>> {
    let rows = sqlx::query_as::<_, PostWithAuthorModel>(
        r#"
        SELECT p.id, p.slug, p.title, p.markdown, p.cover_url, p.author_id, p.created_at,
               a.name AS author_name, a.username AS author_username,
               a.avatar_url AS author_avatar_url, a.created_at AS author_created_at
        FROM posts p
        LEFT JOIN authors a ON a.id = p.author_id
        WHERE p.author_id = $1
        ORDER BY p.created_at DESC, p.id DESC
        "#,
    )
    .bind(author_id.into_inner())
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    with_tags(conn, rows).await
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<PostWithReactions>> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let row = sqlx::query_as::<_, PostWithAuthorModel>(
            r#"
            SELECT p.id, p.slug, p.title, p.markdown, p.cover_url, p.author_id, p.created_at,
                   a.name AS author_name, a.username AS author_username,
                   a.avatar_url AS author_avatar_url, a.created_at AS author_created_at
            FROM posts p
            LEFT JOIN authors a ON a.id = p.author_id
            WHERE p.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let reactions = load_reactions(&mut *tx, row.id).await?;
        let tags = load_tags(&mut *tx, &[row.id]).await?.remove(&row.id).unwrap_or_default();
        tx.commit().await.map_err(map_db_error)?;

        let (post, author) = row.into_parts(tags);
        Ok(Some(PostWithReactions {
            post,
            author,
            reactions,
        }))
    }

    #[instrument(skip(self))]
    async fn find_bookmarked_by(&self, author_id: AuthorId) -> RepoResult<Vec<BookmarkedPost>> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let rows = sqlx::query_as::<_, BookmarkedPostModel>(
            r#"
            SELECT b.author_id AS bookmark_author_id, b.created_at AS bookmarked_at,
                   p.id, p.slug, p.title, p.markdown, p.cover_url, p.author_id, p.created_at,
                   a.name AS author_name, a.username AS author_username,
                   a.avatar_url AS author_avatar_url, a.created_at AS author_created_at
            FROM bookmarks b
            JOIN posts p ON p.id = b.post_id
            LEFT JOIN authors a ON a.id = p.author_id
            WHERE b.author_id = $1
            ORDER BY b.created_at DESC, b.id DESC
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<i64> = rows.iter().map(|row| row.post.id).collect();
        let mut tags = load_tags(&mut *tx, &ids).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let post_tags = tags.remove(&row.post.id).unwrap_or_default();
                row.into_entry(post_tags)
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: u32) -> RepoResult<Vec<PostWithAuthor>> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let rows = sqlx::query_as::<_, PostWithAuthorModel>(
            r#"
            SELECT p.id, p.slug, p.title, p.markdown, p.cover_url, p.author_id, p.created_at,
                   a.name AS author_name, a.username AS author_username,
                   a.avatar_url AS author_avatar_url, a.created_at AS author_created_at
            FROM posts p
            LEFT JOIN authors a ON a.id = p.author_id
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let posts = with_tags(&mut *tx, rows).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn find_by_author_username(&self, username: &str) -> RepoResult<Option<AuthorPosts>> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let author = sqlx::query_as::<_, AuthorRowModel>(
            r#"
            SELECT id, name, username, avatar_url, created_at
            FROM authors
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(author) = author.map(Author::from) else {
            debug!(username, "No author with that username");
            return Ok(None);
        };

        let posts = posts_by_author(&mut *tx, author.id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(AuthorPosts { author, posts }))
    }

    #[instrument(skip(self))]
    async fn find_by_author_id(&self, author_id: AuthorId) -> RepoResult<Vec<PostWithAuthor>> {
        let mut tx = begin_snapshot(&self.pool).await?;
        let posts = posts_by_author(&mut *tx, author_id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn find_by_tag(&self, tag_id: i64) -> RepoResult<Option<TaggedPosts>> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let tag = sqlx::query_as::<_, TagModel>(
            r#"
            SELECT id, name, description
            FROM tags
            WHERE id = $1
            "#,
        )
        .bind(tag_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(tag) = tag.map(Tag::from) else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, PostWithAuthorModel>(
            r#"
            SELECT p.id, p.slug, p.title, p.markdown, p.cover_url, p.author_id, p.created_at,
                   a.name AS author_name, a.username AS author_username,
                   a.avatar_url AS author_avatar_url, a.created_at AS author_created_at
            FROM posts_tags pt
            JOIN posts p ON p.id = pt.id_post
            LEFT JOIN authors a ON a.id = p.author_id
            WHERE pt.id_tag = $1
            ORDER BY p.created_at DESC, p.id DESC
            "#,
        )
        .bind(tag_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let posts = with_tags(&mut *tx, rows).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(TaggedPosts { tag, posts }))
    }

    #[instrument(skip(self))]
    async fn count_comments_by(&self, author_id: AuthorId) -> RepoResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM comments WHERE author_id = $1
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
