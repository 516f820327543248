//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blug_core::entities::{
    Author, AuthorPosts, BookmarkedPost, Comment, Post, PostWithAuthor, Tag, TaggedPosts,
};
use blug_core::panel::ReactionViewState;
use blug_core::PostId;

use super::responses::{
    AuthorProfileResponse, AuthorResponse, BookmarkResponse, CommentResponse, PostResponse,
    PostSummaryResponse, ReactionStateResponse, TagPostsResponse, TagResponse,
};

// ============================================================================
// Author Mappers
// ============================================================================

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            name: author.name.clone(),
            username: author.username.clone(),
            avatar_url: author.avatar_url.clone(),
        }
    }
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self::from(&author)
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
            description: tag.description.clone(),
        }
    }
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            description: tag.description,
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            author_id: comment.author_id.to_string(),
            comment: comment.comment.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Post plus what its page shows next to it
pub struct PostWithDetails<'a> {
    pub post: &'a Post,
    pub author: Option<&'a Author>,
    pub comments: &'a [Comment],
}

impl From<PostWithDetails<'_>> for PostResponse {
    fn from(details: PostWithDetails<'_>) -> Self {
        let post = details.post;
        Self {
            id: post.id,
            slug: post.slug.clone(),
            title: post.title.clone(),
            markdown: post.markdown.clone(),
            cover_url: post.cover_url.clone(),
            author_id: post.author_id.to_string(),
            author: details.author.map(AuthorResponse::from),
            tags: post.tags.iter().map(TagResponse::from).collect(),
            comments: details.comments.iter().map(CommentResponse::from).collect(),
            created_at: post.created_at,
        }
    }
}

impl From<PostWithAuthor> for PostSummaryResponse {
    fn from(entry: PostWithAuthor) -> Self {
        let post = entry.post;
        Self {
            id: post.id,
            slug: post.slug,
            title: post.title,
            cover_url: post.cover_url,
            author: entry.author.map(AuthorResponse::from),
            tags: post.tags.into_iter().map(TagResponse::from).collect(),
            created_at: post.created_at,
        }
    }
}

impl From<BookmarkedPost> for BookmarkResponse {
    fn from(entry: BookmarkedPost) -> Self {
        Self {
            post: PostSummaryResponse::from(PostWithAuthor {
                post: entry.post,
                author: entry.author,
            }),
            bookmarked_at: entry.bookmark.created_at,
        }
    }
}

impl From<AuthorPosts> for AuthorProfileResponse {
    fn from(profile: AuthorPosts) -> Self {
        Self {
            joined_at: profile.author.created_at,
            author: AuthorResponse::from(profile.author),
            posts: profile.posts.into_iter().map(PostSummaryResponse::from).collect(),
        }
    }
}

impl From<TaggedPosts> for TagPostsResponse {
    fn from(tagged: TaggedPosts) -> Self {
        Self {
            tag: TagResponse::from(tagged.tag),
            posts: tagged.posts.into_iter().map(PostSummaryResponse::from).collect(),
        }
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<(PostId, ReactionViewState)> for ReactionStateResponse {
    fn from((post_id, view): (PostId, ReactionViewState)) -> Self {
        Self {
            post_id,
            liked: view.liked,
            like_count: view.like_count,
            bookmarked: view.bookmarked,
            has_comments: view.has_comments,
        }
    }
}
