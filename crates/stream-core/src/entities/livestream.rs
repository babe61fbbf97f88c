//! Livestream entity

use crate::value_objects::Id;

/// Livestream row as stored
///
/// `tag_ids` keeps the order the streamer chose when reserving the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Livestream {
    pub id: Id,
    pub user_id: Id,
    pub title: String,
    pub description: String,
    pub playlist_url: String,
    pub thumbnail_url: String,
    pub start_at: i64,
    pub end_at: i64,
    pub tag_ids: Vec<Id>,
}

impl Livestream {
    /// Check whether the stream is scheduled to be on air at `unix_time`
    #[inline]
    pub fn is_live_at(&self, unix_time: i64) -> bool {
        self.start_at <= unix_time && unix_time < self.end_at
    }

    /// Check whether a tag is attached to this livestream
    #[inline]
    pub fn has_tag(&self, tag_id: Id) -> bool {
        self.tag_ids.contains(&tag_id)
    }
}
