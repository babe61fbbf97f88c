//! Spam report filed against a livecomment

use crate::value_objects::Id;

/// Report row; `user_id` is the reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivecommentReport {
    pub id: Id,
    pub user_id: Id,
    pub livestream_id: Id,
    pub livecomment_id: Id,
    pub created_at: i64,
}
