//! The visitor looking at a page

use serde::Serialize;

use super::AuthorId;

/// Who is viewing a post: nobody in particular, or a signed-in author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", content = "author_id", rename_all = "snake_case")]
pub enum Viewer {
    #[default]
    Anonymous,
    Authenticated(AuthorId),
}

impl Viewer {
    #[inline]
    pub fn author_id(&self) -> Option<AuthorId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(id) => Some(*id),
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

impl From<Option<AuthorId>> for Viewer {
    fn from(id: Option<AuthorId>) -> Self {
        id.map_or(Self::Anonymous, Self::Authenticated)
    }
}
