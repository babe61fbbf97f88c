//! Aggregates read by the ranking and statistics engine

use crate::value_objects::Id;

/// Per-user ranking inputs, summed over the livestreams the user owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserScore {
    pub user_id: Id,
    pub name: String,
    pub reaction_count: i64,
    pub tip_total: i64,
}

impl UserScore {
    #[inline]
    pub fn score(&self) -> i64 {
        self.reaction_count + self.tip_total
    }
}

/// Per-livestream ranking inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivestreamScore {
    pub livestream_id: Id,
    pub reaction_count: i64,
    pub tip_total: i64,
}

impl LivestreamScore {
    #[inline]
    pub fn score(&self) -> i64 {
        self.reaction_count + self.tip_total
    }
}

/// Point-in-time totals over every livestream a user owns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserTotals {
    pub viewers_count: i64,
    pub total_reactions: i64,
    pub total_livecomments: i64,
    pub total_tip: i64,
}

/// Point-in-time totals for one livestream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LivestreamTotals {
    pub viewers_count: i64,
    pub total_reactions: i64,
    pub total_reports: i64,
    pub max_tip: i64,
}

/// How often one emoji was used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiCount {
    pub emoji_name: String,
    pub count: i64,
}

impl EmojiCount {
    pub fn new(emoji_name: impl Into<String>, count: i64) -> Self {
        Self {
            emoji_name: emoji_name.into(),
            count,
        }
    }
}
