//! PostgreSQL implementation of UserRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::batch::{index_by, raw_ids, unique_ids};
use stream_core::entities::User;
use stream_core::traits::{RepoResult, UserRepository};
use stream_core::value_objects::Id;

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<HashMap<Id, User>> {
        let ids = unique_ids(ids.iter().copied());
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, display_name, description
            FROM users
            WHERE id = ANY($1)
            ",
        )
        .bind(raw_ids(&ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(index_by(rows.into_iter().map(User::from), |u| u.id))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, display_name, description
            FROM users
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}
