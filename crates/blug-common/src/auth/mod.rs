//! Viewer authentication
//!
//! Sign-in happens at the hosted backend; this module only verifies the
//! access tokens it issues.

mod jwt;

pub use jwt::{Claims, JwtService, AUTHENTICATED_AUDIENCE};
