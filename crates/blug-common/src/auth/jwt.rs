//! Access token verification
//!
//! The hosted backend signs access tokens with HS256 and a project secret.
//! `sub` carries the author UUID and `aud` is `authenticated` for signed-in
//! users. Encoding is kept for fixtures and local tooling.

use blug_core::{AuthorId, Viewer};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Audience (and role) of tokens belonging to signed-in users
pub const AUTHENTICATED_AUDIENCE: &str = "authenticated";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (author UUID)
    pub sub: String,
    /// Audience
    pub aud: String,
    /// Role granted by the backend
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Claims {
    /// Get the author id from the subject
    ///
    /// # Errors
    /// Returns an error if the subject is not a UUID
    pub fn author_id(&self) -> Result<AuthorId, AppError> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }

    /// Viewer identity carried by these claims
    pub fn viewer(&self) -> Result<Viewer, AppError> {
        self.author_id().map(Viewer::Authenticated)
    }
}

/// Verifies (and, for fixtures, issues) backend access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service from the backend's signing secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[AUTHENTICATED_AUDIENCE]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue an access token for an author
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access_token(&self, author_id: AuthorId, ttl_seconds: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: author_id.to_string(),
            aud: AUTHENTICATED_AUDIENCE.to_string(),
            role: AUTHENTICATED_AUDIENCE.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            email: None,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns an error if the token is malformed, expired, has the wrong
    /// audience, or was signed with another secret
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Resolve the viewer for an optional bearer token
    ///
    /// A missing token is an anonymous viewer; a present but invalid token is an error.
    pub fn resolve_viewer(&self, token: Option<&str>) -> Result<Viewer, AppError> {
        match token {
            None => Ok(Viewer::Anonymous),
            Some(token) => self.validate_access_token(token)?.viewer(),
        }
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService").finish_non_exhaustive()
    }
}
