//! Aggregate row mappers

use stream_core::entities::{
    EmojiCount, LivestreamScore, LivestreamTotals, UserScore, UserTotals,
};
use stream_core::value_objects::Id;

use crate::models::{
    EmojiCountModel, LivestreamScoreModel, LivestreamTotalsModel, UserScoreModel,
    UserTotalsModel,
};

impl From<UserScoreModel> for UserScore {
    fn from(model: UserScoreModel) -> Self {
        UserScore {
            user_id: Id::new(model.user_id),
            name: model.name,
            reaction_count: model.reaction_count,
            tip_total: model.tip_total,
        }
    }
}

impl From<LivestreamScoreModel> for LivestreamScore {
    fn from(model: LivestreamScoreModel) -> Self {
        LivestreamScore {
            livestream_id: Id::new(model.livestream_id),
            reaction_count: model.reaction_count,
            tip_total: model.tip_total,
        }
    }
}

impl From<UserTotalsModel> for UserTotals {
    fn from(model: UserTotalsModel) -> Self {
        UserTotals {
            viewers_count: model.viewers_count,
            total_reactions: model.total_reactions,
            total_livecomments: model.total_livecomments,
            total_tip: model.total_tip,
        }
    }
}

impl From<LivestreamTotalsModel> for LivestreamTotals {
    fn from(model: LivestreamTotalsModel) -> Self {
        LivestreamTotals {
            viewers_count: model.viewers_count,
            total_reactions: model.total_reactions,
            total_reports: model.total_reports,
            max_tip: model.max_tip,
        }
    }
}

impl From<EmojiCountModel> for EmojiCount {
    fn from(model: EmojiCountModel) -> Self {
        EmojiCount::new(model.emoji_name, model.count)
    }
}
