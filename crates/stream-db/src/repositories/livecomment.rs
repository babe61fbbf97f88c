//! PostgreSQL implementation of LivecommentRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::batch::{index_by, raw_ids, unique_ids};
use stream_core::entities::Livecomment;
use stream_core::traits::{LivecommentRepository, RepoResult};
use stream_core::value_objects::Id;

use crate::models::LivecommentModel;

use super::error::{bind_limit, map_db_error};

/// PostgreSQL implementation of LivecommentRepository
#[derive(Clone)]
pub struct PgLivecommentRepository {
    pool: PgPool,
}

impl PgLivecommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LivecommentRepository for PgLivecommentRepository {
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<HashMap<Id, Livecomment>> {
        let ids = unique_ids(ids.iter().copied());
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, LivecommentModel>(
            r"
            SELECT id, user_id, livestream_id, comment, tip, created_at
            FROM livecomments
            WHERE id = ANY($1)
            ",
        )
        .bind(raw_ids(&ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(index_by(rows.into_iter().map(Livecomment::from), |c| c.id))
    }

    #[instrument(skip(self))]
    async fn find_by_livestream(
        &self,
        livestream_id: Id,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Livecomment>> {
        let rows = sqlx::query_as::<_, LivecommentModel>(
            r"
            SELECT id, user_id, livestream_id, comment, tip, created_at
            FROM livecomments
            WHERE livestream_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(livestream_id.into_inner())
        .bind(bind_limit(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Livecomment::from).collect())
    }
}
