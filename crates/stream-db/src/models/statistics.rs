//! Aggregate rows produced by the statistics queries
//!
//! Every aggregate column is cast to `BIGINT` in SQL so it decodes as `i64`.

use sqlx::FromRow;

/// Reaction and tip totals for one user's livestreams
#[derive(Debug, Clone, FromRow)]
pub struct UserScoreModel {
    pub user_id: i64,
    pub name: String,
    pub reaction_count: i64,
    pub tip_total: i64,
}

/// Reaction and tip totals for one livestream
#[derive(Debug, Clone, FromRow)]
pub struct LivestreamScoreModel {
    pub livestream_id: i64,
    pub reaction_count: i64,
    pub tip_total: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserTotalsModel {
    pub viewers_count: i64,
    pub total_reactions: i64,
    pub total_livecomments: i64,
    pub total_tip: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct LivestreamTotalsModel {
    pub viewers_count: i64,
    pub total_reactions: i64,
    pub total_reports: i64,
    pub max_tip: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct EmojiCountModel {
    pub emoji_name: String,
    pub count: i64,
}
