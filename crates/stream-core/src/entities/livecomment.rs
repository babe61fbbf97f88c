//! Livecomment entity - a chat message posted on a livestream, optionally with a tip

use crate::value_objects::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Livecomment {
    pub id: Id,
    pub user_id: Id,
    pub livestream_id: Id,
    pub comment: String,
    pub tip: i64,
    pub created_at: i64,
}
