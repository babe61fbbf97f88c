//! PostgreSQL implementation of ReportRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::batch::{group_by, raw_ids, unique_ids};
use stream_core::entities::LivecommentReport;
use stream_core::traits::{RepoResult, ReportRepository};
use stream_core::value_objects::Id;

use crate::models::LivecommentReportModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self, livestream_ids), fields(count = livestream_ids.len()))]
    async fn find_by_livestream_ids(
        &self,
        livestream_ids: &[Id],
    ) -> RepoResult<HashMap<Id, Vec<LivecommentReport>>> {
        let livestream_ids = unique_ids(livestream_ids.iter().copied());
        if livestream_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, LivecommentReportModel>(
            r"
            SELECT id, user_id, livestream_id, livecomment_id, created_at
            FROM livecomment_reports
            WHERE livestream_id = ANY($1)
            ORDER BY id
            ",
        )
        .bind(raw_ids(&livestream_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(group_by(
            &livestream_ids,
            rows.into_iter().map(LivecommentReport::from),
            |r| r.livestream_id,
        ))
    }
}
