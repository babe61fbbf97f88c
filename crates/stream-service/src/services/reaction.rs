//! Reaction service

use std::collections::HashMap;

use tracing::instrument;

use stream_core::batch::{require_present, unique_ids};
use stream_core::entities::Reaction;
use stream_core::Id;

use crate::dto::{LivestreamResponse, ReactionResponse, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::livestream::LivestreamService;
use super::user::UserService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build reaction responses in input order
    pub async fn assemble_reactions<'r, I>(&self, rows: I) -> ServiceResult<Vec<ReactionResponse>>
    where
        I: IntoIterator<Item = &'r Reaction>,
    {
        let rows: Vec<&Reaction> = rows.into_iter().collect();
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids = unique_ids(rows.iter().map(|row| row.user_id));
        let livestream_ids = unique_ids(rows.iter().map(|row| row.livestream_id));

        let users = UserService::new(self.ctx);
        let livestreams = LivestreamService::new(self.ctx);
        let (users, livestreams) = tokio::try_join!(
            users.get_users(&user_ids),
            livestreams.get_livestreams(&livestream_ids),
        )?;

        rows.into_iter()
            .map(|row| assemble_one(row, &users, &livestreams))
            .collect()
    }

    /// Reactions on a livestream, newest first
    #[instrument(skip(self))]
    pub async fn reactions_for(
        &self,
        livestream_id: Id,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<ReactionResponse>> {
        LivestreamService::new(self.ctx)
            .get_livestream(livestream_id)
            .await?;

        let rows = self
            .ctx
            .query(
                self.ctx
                    .reaction_repo()
                    .find_by_livestream(livestream_id, limit),
            )
            .await?;
        self.assemble_reactions(&rows).await
    }
}

fn assemble_one(
    row: &Reaction,
    users: &HashMap<Id, UserResponse>,
    livestreams: &HashMap<Id, LivestreamResponse>,
) -> ServiceResult<ReactionResponse> {
    Ok(ReactionResponse {
        id: row.id,
        emoji_name: row.emoji_name.clone(),
        user: require_present(users, "user", row.user_id)?.clone(),
        livestream: require_present(livestreams, "livestream", row.livestream_id)?.clone(),
        created_at: row.created_at,
    })
}
