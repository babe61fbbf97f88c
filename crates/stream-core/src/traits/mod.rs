//! Repository traits (ports)

mod repositories;

pub use repositories::{
    IconRepository, LivecommentRepository, LivestreamRepository, ReactionRepository, RepoResult,
    ReportRepository, StatisticsRepository, TagRepository, ThemeRepository, UserRepository,
};
