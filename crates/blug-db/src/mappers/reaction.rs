//! Like / bookmark / comment model -> entity mappers

use blug_core::entities::{Bookmark, Comment, Like};
use blug_core::value_objects::{AuthorId, PostId};

use crate::models::{BookmarkModel, CommentModel, LikeModel};

impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            post_id: PostId::new(model.post_id),
            author_id: AuthorId::new(model.author_id),
            created_at: model.created_at,
        }
    }
}

impl From<BookmarkModel> for Bookmark {
    fn from(model: BookmarkModel) -> Self {
        Bookmark {
            post_id: PostId::new(model.post_id),
            author_id: AuthorId::new(model.author_id),
            created_at: model.created_at,
        }
    }
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: PostId::new(model.post_id),
            author_id: AuthorId::new(model.author_id),
            comment: model.comment,
            created_at: model.created_at,
        }
    }
}
