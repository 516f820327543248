//! # blug-db
//!
//! Database layer implementing the blug-core ports with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - `PgReactionStore` (like/bookmark rows) and `PgPostRepository` (post page, reading list)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blug_db::{create_pool, DatabaseConfig, PgReactionStore};
//! use blug_core::traits::ReactionStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     let store = PgReactionStore::new(pool);
//!
//!     let reactions = store.fetch_post_reactions(42.into()).await?;
//!     println!("{} likes", reactions.like_count());
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgPostRepository, PgReactionStore};
