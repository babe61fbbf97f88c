//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::entities::Reaction;
use stream_core::traits::{ReactionRepository, RepoResult};
use stream_core::value_objects::Id;

use crate::models::ReactionModel;

use super::error::{bind_limit, map_db_error};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_livestream(
        &self,
        livestream_id: Id,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, emoji_name, user_id, livestream_id, created_at
            FROM reactions
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

        Ok(results.into_iter().map(Reaction::from).collect())
    }
}
