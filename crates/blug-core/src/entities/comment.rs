//! Comment entity

use chrono::{DateTime, Utc};

use crate::value_objects::{AuthorId, PostId};

/// A reader's comment on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: PostId,
    pub author_id: AuthorId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
