//! Post, author and tag row -> entity mappers

use blug_core::entities::{Author, Bookmark, BookmarkedPost, Post, PostWithAuthor, Tag};
use blug_core::value_objects::{AuthorId, PostId};

use crate::models::{AuthorModel, AuthorRowModel, BookmarkedPostModel, PostWithAuthorModel, TagModel};

/// Build the author from LEFT JOIN columns; `None` when the join found nothing
pub fn author_from_join(id: AuthorId, model: AuthorModel) -> Option<Author> {
    Some(Author {
        id,
        name: model.name?,
        username: model.username?,
        avatar_url: model.avatar_url,
        created_at: model.created_at?,
    })
}

impl From<AuthorRowModel> for Author {
    fn from(model: AuthorRowModel) -> Self {
        Author {
            id: AuthorId::new(model.id),
            name: model.name,
            username: model.username,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
        }
    }
}

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl PostWithAuthorModel {
    /// Split the row into the post and its (optional) author
    pub fn into_parts(self, tags: Vec<Tag>) -> (Post, Option<Author>) {
        let author_id = AuthorId::new(self.author_id);
        let post = Post {
            id: PostId::new(self.id),
            slug: self.slug,
            title: self.title,
            markdown: self.markdown,
            cover_url: self.cover_url,
            author_id,
            created_at: self.created_at,
            tags,
        };
        (post, author_from_join(author_id, self.author))
    }

    pub fn into_entry(self, tags: Vec<Tag>) -> PostWithAuthor {
        let (post, author) = self.into_parts(tags);
        PostWithAuthor { post, author }
    }
}

impl BookmarkedPostModel {
    pub fn into_entry(self, tags: Vec<Tag>) -> BookmarkedPost {
        let (post, author) = self.post.into_parts(tags);
        BookmarkedPost {
            bookmark: Bookmark {
                post_id: post.id,
                author_id: AuthorId::new(self.bookmark_author_id),
                created_at: self.bookmarked_at,
            },
            post,
            author,
        }
    }
}
