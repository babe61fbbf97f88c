//! Domain entities - rows as the store holds them

mod icon;
mod livecomment;
mod livestream;
mod reaction;
mod report;
mod statistics;
mod tag;
mod user;

pub use icon::{icon_hash, FallbackIcon};
pub use livecomment::Livecomment;
pub use livestream::Livestream;
pub use reaction::Reaction;
pub use report::LivecommentReport;
pub use statistics::{EmojiCount, LivestreamScore, LivestreamTotals, UserScore, UserTotals};
pub use tag::{Tag, TagTable};
pub use user::{Theme, User};
