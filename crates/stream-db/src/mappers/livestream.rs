//! Livestream and tag entity <-> model mappers

use stream_core::entities::{Livestream, Tag};
use stream_core::value_objects::Id;

use crate::models::{LivestreamModel, TagModel};

/// Convert LivestreamModel to Livestream entity
///
/// The JSON tag column keeps its stored order.
impl From<LivestreamModel> for Livestream {
    fn from(model: LivestreamModel) -> Self {
        Livestream {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            title: model.title,
            description: model.description,
            playlist_url: model.playlist_url,
            thumbnail_url: model.thumbnail_url,
            start_at: model.start_at,
            end_at: model.end_at,
            tag_ids: model.tag_ids.0.into_iter().map(Id::new).collect(),
        }
    }
}

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag::new(Id::new(model.id), model.name)
    }
}
