//! PostgreSQL implementation of LivestreamRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::batch::{index_by, raw_ids, unique_ids};
use stream_core::entities::Livestream;
use stream_core::traits::{LivestreamRepository, RepoResult};
use stream_core::value_objects::Id;

use crate::models::LivestreamModel;

use super::error::{bind_limit, map_db_error};

/// PostgreSQL implementation of LivestreamRepository
#[derive(Clone)]
pub struct PgLivestreamRepository {
    pool: PgPool,
}

impl PgLivestreamRepository {
    /// Create a new PgLivestreamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_rows(
        &self,
        sql: &'static str,
        bind: Option<i64>,
    ) -> RepoResult<Vec<Livestream>> {
        let rows = sqlx::query_as::<_, LivestreamModel>(sql)
            .bind(bind)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Livestream::from).collect())
    }
}

#[async_trait]
impl LivestreamRepository for PgLivestreamRepository {
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<HashMap<Id, Livestream>> {
        let ids = unique_ids(ids.iter().copied());
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, LivestreamModel>(
            r"
            SELECT id, user_id, title, description, playlist_url, thumbnail_url,
                   start_at, end_at, tag_ids
            FROM livestreams
            WHERE id = ANY($1)
            ",
        )
        .bind(raw_ids(&ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(index_by(rows.into_iter().map(Livestream::from), |l| l.id))
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: Option<i64>) -> RepoResult<Vec<Livestream>> {
        self.fetch_rows(
            r"
            SELECT id, user_id, title, description, playlist_url, thumbnail_url,
                   start_at, end_at, tag_ids
            FROM livestreams
            ORDER BY id DESC
            LIMIT $1
            ",
            bind_limit(limit),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, user_id: Id) -> RepoResult<Vec<Livestream>> {
        self.fetch_rows(
            r"
            SELECT id, user_id, title, description, playlist_url, thumbnail_url,
                   start_at, end_at, tag_ids
            FROM livestreams
            WHERE user_id = $1
            ORDER BY id DESC
            ",
            Some(user_id.into_inner()),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_tag(&self, tag_id: Id) -> RepoResult<Vec<Livestream>> {
        self.fetch_rows(
            r"
            SELECT id, user_id, title, description, playlist_url, thumbnail_url,
                   start_at, end_at, tag_ids
            FROM livestreams
            WHERE tag_ids @> jsonb_build_array($1::BIGINT)
            ORDER BY id DESC
            ",
            Some(tag_id.into_inner()),
        )
        .await
    }
}
