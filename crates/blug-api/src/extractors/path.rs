//! Path parameter extractors
//!
//! Every `/posts/:post` route shares one segment name. Page routes read it
//! as a slug, reaction routes parse it as a post id. Tag routes carry a
//! numeric tag id.

use blug_core::PostId;
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with the post segment
#[derive(Debug, Deserialize)]
pub struct PostPath {
    pub post: String,
}

impl PostPath {
    /// The segment as a slug
    pub fn slug(&self) -> &str {
        &self.post
    }

    /// Parse the segment as a PostId
    pub fn post_id(&self) -> Result<PostId, ApiError> {
        self.post
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }
}

/// Path parameters with the tag segment
#[derive(Debug, Deserialize)]
pub struct TagPath {
    pub tag: String,
}

impl TagPath {
    /// Parse the segment as a tag id
    pub fn tag_id(&self) -> Result<i64, ApiError> {
        self.tag
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid tag_id format"))
    }
}
