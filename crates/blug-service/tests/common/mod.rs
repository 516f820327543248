//! In-memory backend double shared by the service tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;
use tokio::sync::{Notify, Semaphore};

use blug_core::entities::{
    Author, AuthorPosts, Bookmark, BookmarkedPost, Comment, Like, Post, PostReactions,
    PostWithAuthor, PostWithReactions, Tag, TaggedPosts,
};
use blug_core::error::DomainError;
use blug_core::traits::{PostRepository, ReactionStore, RepoResult};
use blug_core::value_objects::{AuthorId, PostId};

/// A store mutation as the double saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    InsertLike(PostId, AuthorId),
    DeleteLike(PostId, AuthorId),
    InsertBookmark(PostId, AuthorId),
    DeleteBookmark(PostId, AuthorId),
}

#[derive(Default)]
struct Tables {
    authors: HashMap<AuthorId, Author>,
    posts: HashMap<PostId, Post>,
    tags: HashMap<i64, Tag>,
    posts_tags: Vec<(PostId, i64)>,
    likes: Vec<Like>,
    bookmarks: Vec<Bookmark>,
    comments: Vec<Comment>,
}

impl Tables {
    /// The post with its tags and author filled in, as a joined read returns it
    fn hydrate(&self, post: &Post) -> PostWithAuthor {
        let mut post = post.clone();
        let mut tags: Vec<Tag> = self
            .posts_tags
            .iter()
            .filter(|(post_id, _)| *post_id == post.id)
            .filter_map(|(_, tag_id)| self.tags.get(tag_id).cloned())
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        post.tags = tags;

        let author = self.authors.get(&post.author_id).cloned();
        PostWithAuthor { post, author }
    }

    /// Hydrated posts matching `keep`, newest first
    fn newest_first(&self, keep: impl Fn(&Post) -> bool) -> Vec<PostWithAuthor> {
        let mut posts: Vec<&Post> = self.posts.values().filter(|post| keep(post)).collect();
        posts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        posts.into_iter().map(|post| self.hydrate(post)).collect()
    }
}

/// Backend double with failure injection and an optional gate on mutations
#[derive(Default)]
pub struct FakeBackend {
    tables: Mutex<Tables>,
    calls: Mutex<Vec<Call>>,
    fail_mutations: AtomicBool,
    fail_reads: AtomicBool,
    gate: Option<Semaphore>,
    finished: Notify,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Mutations block until `release` is called once per mutation
    pub fn gated() -> Arc<Self> {
        Arc::new(Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        })
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Wait until a mutation has run to completion
    pub async fn mutation_finished(&self) {
        self.finished.notified().await;
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Insert an author with a known username
    pub fn add_author(&self, username: &str) -> AuthorId {
        let id = AuthorId::random();
        self.tables.lock().authors.insert(
            id,
            Author {
                id,
                name: username.to_uppercase(),
                username: username.to_string(),
                avatar_url: None,
                created_at: Utc::now(),
            },
        );
        id
    }

    /// Insert a post and return its id
    ///
    /// Higher ids are newer. Unknown authors get a profile on the fly.
    pub fn add_post(&self, id: i64, slug: &str, author: AuthorId) -> PostId {
        let post_id = PostId::new(id);
        let post = Post {
            id: post_id,
            slug: slug.to_string(),
            title: format!("Post {id}"),
            markdown: "# Hello".to_string(),
            cover_url: None,
            author_id: author,
            created_at: Utc::now() + Duration::seconds(id),
            tags: Vec::new(),
        };

        let mut tables = self.tables.lock();
        tables.authors.entry(author).or_insert_with(|| Author {
            id: author,
            name: "Ada".to_string(),
            username: format!("ada{id}"),
            avatar_url: None,
            created_at: Utc::now(),
        });
        tables.posts.insert(post_id, post);
        post_id
    }

    pub fn add_tag(&self, id: i64, name: &str) {
        self.tables.lock().tags.insert(
            id,
            Tag {
                id,
                name: name.to_string(),
                description: format!("Posts about {name}"),
            },
        );
    }

    pub fn tag_post(&self, post_id: PostId, tag_id: i64) {
        self.tables.lock().posts_tags.push((post_id, tag_id));
    }

    pub fn seed_likes(&self, post_id: PostId, count: usize) {
        let mut tables = self.tables.lock();
        for _ in 0..count {
            tables.likes.push(Like::new(post_id, AuthorId::random()));
        }
    }

    pub fn seed_like(&self, post_id: PostId, author_id: AuthorId) {
        self.tables.lock().likes.push(Like::new(post_id, author_id));
    }

    /// Bookmark saved `minutes_ago`
    pub fn seed_bookmark(&self, post_id: PostId, author_id: AuthorId, minutes_ago: i64) {
        let mut bookmark = Bookmark::new(post_id, author_id);
        bookmark.created_at = Utc::now() - Duration::minutes(minutes_ago);
        self.tables.lock().bookmarks.push(bookmark);
    }

    pub fn seed_comment(&self, post_id: PostId, text: &str) {
        self.seed_comment_by(post_id, AuthorId::random(), text);
    }

    pub fn seed_comment_by(&self, post_id: PostId, author_id: AuthorId, text: &str) {
        let mut tables = self.tables.lock();
        let id = tables.comments.len() as i64 + 1;
        tables.comments.push(Comment {
            id,
            post_id,
            author_id,
            comment: text.to_string(),
            created_at: Utc::now() + Duration::seconds(id),
        });
    }

    pub fn like_rows(&self, post_id: PostId, author_id: AuthorId) -> usize {
        self.tables
            .lock()
            .likes
            .iter()
            .filter(|l| l.post_id == post_id && l.author_id == author_id)
            .count()
    }

    pub fn bookmark_rows(&self, post_id: PostId, author_id: AuthorId) -> usize {
        self.tables
            .lock()
            .bookmarks
            .iter()
            .filter(|b| b.post_id == post_id && b.author_id == author_id)
            .count()
    }

    /// Snapshot as the backend would embed it in a post read
    pub fn snapshot(&self, post_id: PostId) -> PostReactions {
        let tables = self.tables.lock();
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        PostReactions {
            likes: tables.likes.iter().filter(|l| l.post_id == post_id).cloned().collect(),
            bookmarks: tables
                .bookmarks
                .iter()
                .filter(|b| b.post_id == post_id)
                .cloned()
                .collect(),
            comments,
        }
    }

    async fn mutation(&self, call: Call) -> RepoResult<()> {
        self.calls.lock().push(call);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| DomainError::InternalError(e.to_string()))?
                .forget();
        }

        let result = self.apply(call);
        self.finished.notify_one();
        result
    }

    fn apply(&self, call: Call) -> RepoResult<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }

        let mut tables = self.tables.lock();
        match call {
            Call::InsertLike(post_id, author_id) => {
                if !tables.posts.contains_key(&post_id) {
                    return Err(DomainError::PostNotFound(post_id));
                }
                if tables.likes.iter().any(|l| l.post_id == post_id && l.author_id == author_id) {
                    return Err(DomainError::LikeAlreadyExists);
                }
                tables.likes.push(Like::new(post_id, author_id));
            }
            Call::DeleteLike(post_id, author_id) => {
                tables.likes.retain(|l| !(l.post_id == post_id && l.author_id == author_id));
            }
            Call::InsertBookmark(post_id, author_id) => {
                if !tables.posts.contains_key(&post_id) {
                    return Err(DomainError::PostNotFound(post_id));
                }
                if tables
                    .bookmarks
                    .iter()
                    .any(|b| b.post_id == post_id && b.author_id == author_id)
                {
                    return Err(DomainError::BookmarkAlreadyExists);
                }
                tables.bookmarks.push(Bookmark::new(post_id, author_id));
            }
            Call::DeleteBookmark(post_id, author_id) => {
                tables
                    .bookmarks
                    .retain(|b| !(b.post_id == post_id && b.author_id == author_id));
            }
        }
        Ok(())
    }

    fn read_guard(&self) -> RepoResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("read timed out".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReactionStore for FakeBackend {
    async fn insert_like(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()> {
        self.mutation(Call::InsertLike(post_id, author_id)).await
    }

    async fn delete_like(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()> {
        self.mutation(Call::DeleteLike(post_id, author_id)).await
    }

    async fn insert_bookmark(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()> {
        self.mutation(Call::InsertBookmark(post_id, author_id)).await
    }

    async fn delete_bookmark(&self, post_id: PostId, author_id: AuthorId) -> RepoResult<()> {
        self.mutation(Call::DeleteBookmark(post_id, author_id)).await
    }

    async fn fetch_post_reactions(&self, post_id: PostId) -> RepoResult<PostReactions> {
        self.read_guard()?;
        if !self.tables.lock().posts.contains_key(&post_id) {
            return Err(DomainError::PostNotFound(post_id));
        }
        Ok(self.snapshot(post_id))
    }
}

#[async_trait]
impl PostRepository for FakeBackend {
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<PostWithReactions>> {
        self.read_guard()?;
        let found = {
            let tables = self.tables.lock();
            tables
                .posts
                .values()
                .find(|post| post.slug == slug)
                .map(|post| tables.hydrate(post))
        };

        Ok(found.map(|entry| {
            let reactions = self.snapshot(entry.post.id);
            PostWithReactions {
                post: entry.post,
                author: entry.author,
                reactions,
            }
        }))
    }

    async fn find_bookmarked_by(&self, author_id: AuthorId) -> RepoResult<Vec<BookmarkedPost>> {
        self.read_guard()?;
        let tables = self.tables.lock();
        let mut entries: Vec<BookmarkedPost> = tables
            .bookmarks
            .iter()
            .filter(|b| b.author_id == author_id)
            .filter_map(|b| {
                tables.posts.get(&b.post_id).map(|post| {
                    let entry = tables.hydrate(post);
                    BookmarkedPost {
                        bookmark: b.clone(),
                        post: entry.post,
                        author: entry.author,
                    }
                })
            })
            .collect();
        entries.sort_by(|a, b| b.bookmark.created_at.cmp(&a.bookmark.created_at));
        Ok(entries)
    }

    async fn list_recent(&self, limit: u32) -> RepoResult<Vec<PostWithAuthor>> {
        self.read_guard()?;
        let mut posts = self.tables.lock().newest_first(|_| true);
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn find_by_author_username(&self, username: &str) -> RepoResult<Option<AuthorPosts>> {
        self.read_guard()?;
        let tables = self.tables.lock();
        let Some(author) = tables.authors.values().find(|a| a.username == username).cloned() else {
            return Ok(None);
        };

        let posts = tables.newest_first(|post| post.author_id == author.id);
        Ok(Some(AuthorPosts { author, posts }))
    }

    async fn find_by_author_id(&self, author_id: AuthorId) -> RepoResult<Vec<PostWithAuthor>> {
        self.read_guard()?;
        Ok(self.tables.lock().newest_first(|post| post.author_id == author_id))
    }

    async fn find_by_tag(&self, tag_id: i64) -> RepoResult<Option<TaggedPosts>> {
        self.read_guard()?;
        let tables = self.tables.lock();
        let Some(tag) = tables.tags.get(&tag_id).cloned() else {
            return Ok(None);
        };

        let posts = tables.newest_first(|post| {
            tables
                .posts_tags
                .iter()
                .any(|(post_id, tagged)| *post_id == post.id && *tagged == tag_id)
        });
        Ok(Some(TaggedPosts { tag, posts }))
    }

    async fn count_comments_by(&self, author_id: AuthorId) -> RepoResult<u64> {
        self.read_guard()?;
        let count = self
            .tables
            .lock()
            .comments
            .iter()
            .filter(|c| c.author_id == author_id)
            .count();
        Ok(count as u64)
    }
}
