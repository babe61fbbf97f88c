//! Livecomment, reaction and report entity <-> model mappers

use stream_core::entities::{Livecomment, LivecommentReport, Reaction};
use stream_core::value_objects::Id;

use crate::models::{LivecommentModel, LivecommentReportModel, ReactionModel};

impl From<LivecommentModel> for Livecomment {
    fn from(model: LivecommentModel) -> Self {
        Livecomment {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            livestream_id: Id::new(model.livestream_id),
            comment: model.comment,
            tip: model.tip,
            created_at: model.created_at,
        }
    }
}

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: Id::new(model.id),
            emoji_name: model.emoji_name,
            user_id: Id::new(model.user_id),
            livestream_id: Id::new(model.livestream_id),
            created_at: model.created_at,
        }
    }
}

impl From<LivecommentReportModel> for LivecommentReport {
    fn from(model: LivecommentReportModel) -> Self {
        LivecommentReport {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            livestream_id: Id::new(model.livestream_id),
            livecomment_id: Id::new(model.livecomment_id),
            created_at: model.created_at,
        }
    }
}
