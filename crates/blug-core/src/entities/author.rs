//! Author entity - the public profile of a signed-up user

use chrono::{DateTime, Utc};

use crate::value_objects::AuthorId;

/// Author profile (`authors` row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
