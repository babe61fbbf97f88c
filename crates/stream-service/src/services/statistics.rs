//! Statistics service
//!
//! Point-in-time statistics and leaderboards. Nothing here is cached; every
//! call reads fresh aggregates.

use tracing::instrument;

use stream_core::error::DomainError;
use stream_core::Id;

use crate::dto::{
    LivestreamRankingEntry, LivestreamStatisticsResponse, UserRankingEntry,
    UserStatisticsResponse,
};
use crate::ranking;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Statistics service
pub struct StatisticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatisticsService<'a> {
    /// Create a new StatisticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Statistics over every livestream the named user owns
    ///
    /// # Errors
    /// `InvalidQuery` for a blank name, `UserNameNotFound` for an unknown one.
    #[instrument(skip(self))]
    pub async fn user_statistics(&self, username: &str) -> ServiceResult<UserStatisticsResponse> {
        if username.trim().is_empty() {
            return Err(DomainError::InvalidQuery("username must not be empty".to_string()).into());
        }

        let user = UserService::new(self.ctx).find_by_name(username).await?;
        let repo = self.ctx.statistics_repo();

        let (scores, totals, emojis) = tokio::try_join!(
            self.ctx.query(repo.user_scores()),
            self.ctx.query(repo.user_totals(user.id)),
            self.ctx.query(repo.user_emoji_counts(user.id)),
        )?;

        let rank = ranking::user_rank(&scores, user.id)
            .ok_or_else(|| DomainError::UserNameNotFound(username.to_string()))?;

        Ok(UserStatisticsResponse {
            rank,
            viewers_count: totals.viewers_count,
            total_reactions: totals.total_reactions,
            total_livecomments: totals.total_livecomments,
            total_tip: totals.total_tip,
            favorite_emoji: ranking::favorite_emoji(&emojis),
        })
    }

    /// Statistics for one livestream
    ///
    /// # Errors
    /// `LivestreamNotFound` when no such livestream exists.
    #[instrument(skip(self))]
    pub async fn livestream_statistics(
        &self,
        livestream_id: Id,
    ) -> ServiceResult<LivestreamStatisticsResponse> {
        let repo = self.ctx.statistics_repo();
        let wanted = [livestream_id];

        let (exists, scores, totals) = tokio::try_join!(
            self.ctx.query(self.ctx.livestream_repo().find_by_ids(&wanted)),
            self.ctx.query(repo.livestream_scores()),
            self.ctx.query(repo.livestream_totals(livestream_id)),
        )?;

        if !exists.contains_key(&livestream_id) {
            return Err(DomainError::LivestreamNotFound(livestream_id).into());
        }
        let rank = ranking::livestream_rank(&scores, livestream_id)
            .ok_or(DomainError::LivestreamNotFound(livestream_id))?;

        Ok(LivestreamStatisticsResponse {
            rank,
            viewers_count: totals.viewers_count,
            total_reactions: totals.total_reactions,
            total_reports: totals.total_reports,
            max_tip: totals.max_tip,
        })
    }

    /// Users best first
    #[instrument(skip(self))]
    pub async fn user_leaderboard(
        &self,
        limit: Option<usize>,
    ) -> ServiceResult<Vec<UserRankingEntry>> {
        let scores = self
            .ctx
            .query(self.ctx.statistics_repo().user_scores())
            .await?;
        Ok(ranking::user_leaderboard(scores, limit))
    }

    /// Livestreams best first
    #[instrument(skip(self))]
    pub async fn livestream_leaderboard(
        &self,
        limit: Option<usize>,
    ) -> ServiceResult<Vec<LivestreamRankingEntry>> {
        let scores = self
            .ctx
            .query(self.ctx.statistics_repo().livestream_scores())
            .await?;
        Ok(ranking::livestream_leaderboard(scores, limit))
    }
}
