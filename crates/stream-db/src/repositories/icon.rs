//! PostgreSQL implementation of IconRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::batch::{raw_ids, unique_ids};
use stream_core::traits::{IconRepository, RepoResult};
use stream_core::value_objects::Id;

use crate::models::IconHashModel;

use super::error::map_db_error;

/// PostgreSQL implementation of IconRepository
#[derive(Clone)]
pub struct PgIconRepository {
    pool: PgPool,
}

impl PgIconRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IconRepository for PgIconRepository {
    #[instrument(skip(self, user_ids), fields(count = user_ids.len()))]
    async fn find_hashes_by_user_ids(&self, user_ids: &[Id]) -> RepoResult<HashMap<Id, String>> {
        let user_ids = unique_ids(user_ids.iter().copied());
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        // The stored hash is written alongside the image, so the blob never
        // leaves the database on this path.
        let rows = sqlx::query_as::<_, IconHashModel>(
            r"
            SELECT user_id, hash
            FROM icons
            WHERE user_id = ANY($1)
            ",
        )
        .bind(raw_ids(&user_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| (Id::new(row.user_id), row.hash))
            .collect())
    }
}
