//! Service context - dependency container for services
//!
//! Holds the backend ports and the settings the services need.

use std::sync::Arc;

use blug_common::auth::JwtService;
use blug_core::traits::{PostRepository, ReactionStore};
use blug_db::PgPool;

use super::error::{ServiceError, ServiceResult};
use super::reaction::DEFAULT_LOGIN_PATH;

/// Service context containing all dependencies
///
/// - Database pool (readiness check)
/// - Reaction store and post repository (the backend ports)
/// - JWT service for resolving viewers
/// - Login path used by sign-in prompts
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Ports
    reaction_store: Arc<dyn ReactionStore>,
    post_repo: Arc<dyn PostRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    // Settings
    login_path: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        reaction_store: Arc<dyn ReactionStore>,
        post_repo: Arc<dyn PostRepository>,
        jwt_service: Arc<JwtService>,
        login_path: String,
    ) -> Self {
        Self {
            pool,
            reaction_store,
            post_repo,
            jwt_service,
            login_path,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Ports ===

    /// Get the reaction store
    pub fn reaction_store(&self) -> &dyn ReactionStore {
        self.reaction_store.as_ref()
    }

    /// Shared handle to the reaction store, for controllers
    pub fn reaction_store_handle(&self) -> Arc<dyn ReactionStore> {
        Arc::clone(&self.reaction_store)
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    // === Settings ===

    /// Login page linked from sign-in prompts
    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("ports", &"...")
            .field("login_path", &self.login_path)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    reaction_store: Option<Arc<dyn ReactionStore>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    login_path: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn reaction_store(mut self, store: Arc<dyn ReactionStore>) -> Self {
        self.reaction_store = Some(store);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.reaction_store.ok_or_else(|| ServiceError::validation("reaction_store is required"))?,
            self.post_repo.ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.login_path.unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string()),
        ))
    }
}
