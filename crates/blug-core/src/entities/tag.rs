//! Tag entity

/// A topic label attached to posts through `posts_tags`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub description: String,
}
