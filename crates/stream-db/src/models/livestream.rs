//! Livestream database model

use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for livestreams table
#[derive(Debug, Clone, FromRow)]
pub struct LivestreamModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub playlist_url: String,
    pub thumbnail_url: String,
    pub start_at: i64,
    pub end_at: i64,
    /// JSONB array of tag ids, in display order
    pub tag_ids: Json<Vec<i64>>,
}
