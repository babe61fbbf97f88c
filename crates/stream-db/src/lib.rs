//! # stream-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `stream-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Batched repository implementations (one `= ANY($1)` query per call)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stream_db::{create_pool, DatabaseConfig, PgUserRepository};
//! use stream_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let users = PgUserRepository::new(pool);
//!     let found = users.find_by_ids(&[1.into(), 2.into()]).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool, MIGRATIONS_DIR};
pub use repositories::{
    PgIconRepository, PgLivecommentRepository, PgLivestreamRepository, PgReactionRepository,
    PgReportRepository, PgStatisticsRepository, PgTagRepository, PgThemeRepository,
    PgUserRepository,
};
