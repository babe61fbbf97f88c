//! Reaction entity - an emoji sent to a livestream

use crate::value_objects::Id;

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Id,
    pub emoji_name: String,
    pub user_id: Id,
    pub livestream_id: Id,
    pub created_at: i64,
}
