//! Livecomment service

use std::collections::HashMap;

use tracing::instrument;

use stream_core::batch::{require_present, unique_ids};
use stream_core::entities::Livecomment;
use stream_core::Id;

use crate::dto::{LivecommentResponse, LivestreamResponse, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::livestream::LivestreamService;
use super::user::UserService;

/// Livecomment service
pub struct LivecommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LivecommentService<'a> {
    /// Create a new LivecommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build livecomment responses in input order
    ///
    /// Authors and livestreams are resolved concurrently, one batch each.
    pub async fn assemble_livecomments<'c, I>(
        &self,
        rows: I,
    ) -> ServiceResult<Vec<LivecommentResponse>>
    where
        I: IntoIterator<Item = &'c Livecomment>,
    {
        let rows: Vec<&Livecomment> = rows.into_iter().collect();
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

    /// Comments on a livestream, newest first
    #[instrument(skip(self))]
    pub async fn livecomments_for(
        &self,
        livestream_id: Id,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<LivecommentResponse>> {
        LivestreamService::new(self.ctx)
            .get_livestream(livestream_id)
            .await?;

        let rows = self
            .ctx
            .query(
                self.ctx
                    .livecomment_repo()
                    .find_by_livestream(livestream_id, limit),
            )
            .await?;
        self.assemble_livecomments(&rows).await
    }
}

fn assemble_one(
    row: &Livecomment,
    users: &HashMap<Id, UserResponse>,
    livestreams: &HashMap<Id, LivestreamResponse>,
) -> ServiceResult<LivecommentResponse> {
    Ok(LivecommentResponse {
        id: row.id,
        user: require_present(users, "user", row.user_id)?.clone(),
        livestream: require_present(livestreams, "livestream", row.livestream_id)?.clone(),
        comment: row.comment.clone(),
        tip: row.tip,
        created_at: row.created_at,
    })
}
