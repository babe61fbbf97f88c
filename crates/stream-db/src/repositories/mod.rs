//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in stream-core.
//! Batched lookups de-duplicate their input, skip the round-trip entirely for
//! an empty id set, and otherwise bind the ids as one `BIGINT[]` parameter.

mod error;
mod icon;
mod livecomment;
mod livestream;
mod reaction;
mod report;
mod statistics;
mod tag;
mod theme;
mod user;

pub use icon::PgIconRepository;
pub use livecomment::PgLivecommentRepository;
pub use livestream::PgLivestreamRepository;
pub use reaction::PgReactionRepository;
pub use report::PgReportRepository;
pub use statistics::PgStatisticsRepository;
pub use tag::PgTagRepository;
pub use theme::PgThemeRepository;
pub use user::PgUserRepository;
