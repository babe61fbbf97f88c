//! Livecomment report database model

use sqlx::FromRow;

/// Database model for livecomment_reports table
#[derive(Debug, Clone, FromRow)]
pub struct LivecommentReportModel {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub livecomment_id: i64,
    pub created_at: i64,
}
