//! Database models - SQLx-compatible structs for PostgreSQL tables

mod livecomment;
mod livestream;
mod reaction;
mod report;
mod statistics;
mod tag;
mod user;

pub use livecomment::LivecommentModel;
pub use livestream::LivestreamModel;
pub use reaction::ReactionModel;
pub use report::LivecommentReportModel;
pub use statistics::{
    EmojiCountModel, LivestreamScoreModel, LivestreamTotalsModel, UserScoreModel,
    UserTotalsModel,
};
pub use tag::TagModel;
pub use user::{IconHashModel, ThemeModel, UserModel};
