//! PostgreSQL implementation of TagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::entities::Tag;
use stream_core::traits::{RepoResult, TagRepository};

use crate::models::TagModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagModel>("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }
}
