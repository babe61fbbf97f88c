//! PostgreSQL implementation of StatisticsRepository
//!
//! Aggregates are computed in SQL and cast to `BIGINT` so `COUNT`/`SUM`
//! results decode uniformly as `i64`. Subjects with no activity still
//! appear with zero counts.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stream_core::entities::{
    EmojiCount, LivestreamScore, LivestreamTotals, UserScore, UserTotals,
};
use stream_core::traits::{RepoResult, StatisticsRepository};
use stream_core::value_objects::Id;

use crate::models::{
    EmojiCountModel, LivestreamScoreModel, LivestreamTotalsModel, UserScoreModel,
    UserTotalsModel,
};

use super::error::map_db_error;

/// PostgreSQL implementation of StatisticsRepository
#[derive(Clone)]
pub struct PgStatisticsRepository {
    pool: PgPool,
}

impl PgStatisticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatisticsRepository for PgStatisticsRepository {
    #[instrument(skip(self))]
    async fn user_scores(&self) -> RepoResult<Vec<UserScore>> {
        let rows = sqlx::query_as::<_, UserScoreModel>(
            r"
            SELECT u.id AS user_id,
                   u.name,
                   COALESCE(rc.reaction_count, 0)::BIGINT AS reaction_count,
                   COALESCE(tp.tip_total, 0)::BIGINT AS tip_total
            FROM users u
            LEFT JOIN (
                SELECT l.user_id, COUNT(*) AS reaction_count
                FROM reactions r
                JOIN livestreams l ON l.id = r.livestream_id
                GROUP BY l.user_id
            ) rc ON rc.user_id = u.id
            LEFT JOIN (
                SELECT l.user_id, SUM(lc.tip) AS tip_total
                FROM livecomments lc
                JOIN livestreams l ON l.id = lc.livestream_id
                GROUP BY l.user_id
            ) tp ON tp.user_id = u.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(UserScore::from).collect())
    }

    #[instrument(skip(self))]
    async fn livestream_scores(&self) -> RepoResult<Vec<LivestreamScore>> {
        let rows = sqlx::query_as::<_, LivestreamScoreModel>(
            r"
            SELECT l.id AS livestream_id,
                   COALESCE(rc.reaction_count, 0)::BIGINT AS reaction_count,
                   COALESCE(tp.tip_total, 0)::BIGINT AS tip_total
            FROM livestreams l
            LEFT JOIN (
                SELECT livestream_id, COUNT(*) AS reaction_count
                FROM reactions
                GROUP BY livestream_id
            ) rc ON rc.livestream_id = l.id
            LEFT JOIN (
                SELECT livestream_id, SUM(tip) AS tip_total
                FROM livecomments
                GROUP BY livestream_id
            ) tp ON tp.livestream_id = l.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LivestreamScore::from).collect())
    }

    #[instrument(skip(self))]
    async fn user_totals(&self, user_id: Id) -> RepoResult<UserTotals> {
        let row = sqlx::query_as::<_, UserTotalsModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM livestream_viewers_history h
                   JOIN livestreams l ON l.id = h.livestream_id
                  WHERE l.user_id = $1)::BIGINT AS viewers_count,
                (SELECT COUNT(*) FROM reactions r
                   JOIN livestreams l ON l.id = r.livestream_id
                  WHERE l.user_id = $1)::BIGINT AS total_reactions,
                (SELECT COUNT(*) FROM livecomments lc
                   JOIN livestreams l ON l.id = lc.livestream_id
                  WHERE l.user_id = $1)::BIGINT AS total_livecomments,
                (SELECT COALESCE(SUM(lc.tip), 0) FROM livecomments lc
                   JOIN livestreams l ON l.id = lc.livestream_id
                  WHERE l.user_id = $1)::BIGINT AS total_tip
            ",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(UserTotals::from(row))
    }

    #[instrument(skip(self))]
    async fn user_emoji_counts(&self, user_id: Id) -> RepoResult<Vec<EmojiCount>> {
        let rows = sqlx::query_as::<_, EmojiCountModel>(
            r"
            SELECT r.emoji_name, COUNT(*)::BIGINT AS count
            FROM reactions r
            JOIN livestreams l ON l.id = r.livestream_id
            WHERE l.user_id = $1
            GROUP BY r.emoji_name
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(EmojiCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn livestream_totals(&self, livestream_id: Id) -> RepoResult<LivestreamTotals> {
        let row = sqlx::query_as::<_, LivestreamTotalsModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM livestream_viewers_history
                  WHERE livestream_id = $1)::BIGINT AS viewers_count,
                (SELECT COUNT(*) FROM reactions
                  WHERE livestream_id = $1)::BIGINT AS total_reactions,
                (SELECT COUNT(*) FROM livecomment_reports
                  WHERE livestream_id = $1)::BIGINT AS total_reports,
                (SELECT COALESCE(MAX(tip), 0) FROM livecomments
                  WHERE livestream_id = $1)::BIGINT AS max_tip
            ",
        )
        .bind(livestream_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(LivestreamTotals::from(row))
    }
}
