//! PostgreSQL implementation of ThemeRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::batch::{index_by, raw_ids, unique_ids};
use stream_core::entities::Theme;
use stream_core::traits::{RepoResult, ThemeRepository};
use stream_core::value_objects::Id;

use crate::models::ThemeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ThemeRepository
#[derive(Clone)]
pub struct PgThemeRepository {
    pool: PgPool,
}

impl PgThemeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThemeRepository for PgThemeRepository {
    #[instrument(skip(self, user_ids), fields(count = user_ids.len()))]
    async fn find_by_user_ids(&self, user_ids: &[Id]) -> RepoResult<HashMap<Id, Theme>> {
        let user_ids = unique_ids(user_ids.iter().copied());
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ThemeModel>(
            r"
            SELECT id, user_id, dark_mode
            FROM themes
            WHERE user_id = ANY($1)
            ",
        )
        .bind(raw_ids(&user_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(index_by(rows.into_iter().map(Theme::from), |t| t.user_id))
    }
}
