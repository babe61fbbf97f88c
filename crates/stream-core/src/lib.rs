//! # stream-core
//!
//! Domain layer containing entities, value objects, repository traits and the
//! batch helpers every repository implementation shares.
//! This crate has zero dependencies on infrastructure (database, cache, etc.).

pub mod batch;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    icon_hash, EmojiCount, FallbackIcon, Livecomment, LivecommentReport, Livestream,
    LivestreamScore, LivestreamTotals, Reaction, Tag, TagTable, Theme, User, UserScore,
    UserTotals,
};
pub use error::DomainError;
pub use traits::{
    IconRepository, LivecommentRepository, LivestreamRepository, ReactionRepository, RepoResult,
    ReportRepository, StatisticsRepository, TagRepository, ThemeRepository, UserRepository,
};
pub use value_objects::Id;
