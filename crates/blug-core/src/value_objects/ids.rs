//! Identifiers for backend rows
//!
//! - `PostId`: the `bigint` identity of a row in `posts`
//! - `AuthorId`: the UUID of an authenticated author (the backend's auth user id)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Post identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PostId(i64);

impl PostId {
    /// Create a new PostId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.trim()
            .parse::<i64>()
            .map(PostId)
            .map_err(|_| IdParseError::InvalidPostId)
    }
}

/// Error when parsing an identifier from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid post id")]
    InvalidPostId,

    #[error("invalid author id")]
    InvalidAuthorId,
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<PostId> for i64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

impl std::str::FromStr for PostId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostId::parse(s)
    }
}

impl Serialize for PostId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Deserialize from number or numeric string (form fields arrive as strings)
impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PostIdVisitor;

        impl Visitor<'_> for PostIdVisitor {
            type Value = PostId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or numeric string post id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<PostId, E>
            where
                E: de::Error,
            {
                Ok(PostId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<PostId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(PostId)
                    .map_err(|_| de::Error::custom("post id out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<PostId, E>
            where
                E: de::Error,
            {
                PostId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(PostIdVisitor)
    }
}

/// Author identifier (auth user UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(Uuid);

impl AuthorId {
    #[inline]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Generate a random id (tests and fixtures)
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(s.trim())
            .map(AuthorId)
            .map_err(|_| IdParseError::InvalidAuthorId)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for AuthorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for AuthorId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthorId::parse(s)
    }
}
