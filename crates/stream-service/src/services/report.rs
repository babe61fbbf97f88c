//! Livecomment report service

use std::collections::HashMap;

use tracing::instrument;

use stream_core::batch::{require_present, unique_ids};
use stream_core::entities::{Livecomment, LivecommentReport};
use stream_core::Id;

use crate::dto::LivecommentReportResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::livecomment::LivecommentService;
use super::livestream::LivestreamService;
use super::user::UserService;

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build report responses in input order
    ///
    /// Reporters and the reported livecomments are fetched concurrently; the
    /// livecomments are then assembled as one batch, so a report set costs
    /// the same number of queries whatever its size.
    pub async fn assemble_reports<'r, I>(
        &self,
        rows: I,
    ) -> ServiceResult<Vec<LivecommentReportResponse>>
    where
        I: IntoIterator<Item = &'r LivecommentReport>,
    {
        let rows: Vec<&LivecommentReport> = rows.into_iter().collect();
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let reporter_ids = unique_ids(rows.iter().map(|row| row.user_id));
        let livecomment_ids = unique_ids(rows.iter().map(|row| row.livecomment_id));

        let users = UserService::new(self.ctx);
        let (reporters, livecomment_rows) = tokio::try_join!(
            users.get_users(&reporter_ids),
            async {
                self.ctx
                    .query(self.ctx.livecomment_repo().find_by_ids(&livecomment_ids))
                    .await
                    .map_err(ServiceError::from)
            },
        )?;

        let ordered = livecomment_ids
            .iter()
            .map(|&id| require_present(&livecomment_rows, "livecomment", id))
            .collect::<Result<Vec<&Livecomment>, _>>()?;
        let livecomments: HashMap<Id, _> = LivecommentService::new(self.ctx)
            .assemble_livecomments(ordered)
            .await?
            .into_iter()
            .map(|livecomment| (livecomment.id, livecomment))
            .collect();

        rows.into_iter()
            .map(|row| -> ServiceResult<LivecommentReportResponse> {
                Ok(LivecommentReportResponse {
                    id: row.id,
                    reporter: require_present(&reporters, "user", row.user_id)?.clone(),
                    livecomment: require_present(&livecomments, "livecomment", row.livecomment_id)?
                        .clone(),
                    created_at: row.created_at,
                })
            })
            .collect()
    }

    /// Reports filed against comments on a livestream
    #[instrument(skip(self))]
    pub async fn reports_for(
        &self,
        livestream_id: Id,
    ) -> ServiceResult<Vec<LivecommentReportResponse>> {
        LivestreamService::new(self.ctx)
            .get_livestream(livestream_id)
            .await?;

        let mut grouped = self
            .ctx
            .query(self.ctx.report_repo().find_by_livestream_ids(&[livestream_id]))
            .await?;
        let rows = grouped.remove(&livestream_id).unwrap_or_default();
        self.assemble_reports(&rows).await
    }
}
