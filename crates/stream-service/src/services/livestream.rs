//! Livestream service
//!
//! Resolves livestreams through the livestream cache and assembles them with
//! their owner and tags.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use stream_core::batch::{require_present, unique_ids};
use stream_core::entities::Livestream;
use stream_core::error::DomainError;
use stream_core::traits::RepoResult;
use stream_core::Id;

use crate::dto::{LivestreamResponse, TagResponse, TagsResponse, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Livestream service
pub struct LivestreamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LivestreamService<'a> {
    /// Create a new LivestreamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve livestreams by id, keyed by id
    ///
    /// Unknown ids are absent from the result.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn get_livestreams(
        &self,
        ids: &[Id],
    ) -> ServiceResult<HashMap<Id, LivestreamResponse>> {
        let rows = self.load_livestreams(ids).await?;
        let assembled = self
            .assemble_livestreams(rows.values().map(AsRef::as_ref))
            .await?;
        Ok(assembled
            .into_iter()
            .map(|livestream| (livestream.id, livestream))
            .collect())
    }

    /// Resolve one livestream by id
    #[instrument(skip(self))]
    pub async fn get_livestream(&self, livestream_id: Id) -> ServiceResult<LivestreamResponse> {
        let mut livestreams = self.get_livestreams(&[livestream_id]).await?;
        livestreams
            .remove(&livestream_id)
            .ok_or_else(|| DomainError::LivestreamNotFound(livestream_id).into())
    }

    /// Build livestream responses for rows already in hand, in input order
    ///
    /// Owners are resolved in one batch. A missing owner or an unknown tag id
    /// fails the whole call with `MissingReference`.
    pub async fn assemble_livestreams<'l, I>(&self, rows: I) -> ServiceResult<Vec<LivestreamResponse>>
    where
        I: IntoIterator<Item = &'l Livestream>,
    {
        let rows: Vec<&Livestream> = rows.into_iter().collect();
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let owner_ids = unique_ids(rows.iter().map(|row| row.user_id));
        let owners = UserService::new(self.ctx).get_users(&owner_ids).await?;

        rows.into_iter()
            .map(|row| self.assemble_one(row, &owners))
            .collect()
    }

    /// Livestreams carrying the named tag, or the most recent ones when no
    /// tag is given; newest first either way
    ///
    /// An unknown tag name matches nothing.
    #[instrument(skip(self))]
    pub async fn search_livestreams(
        &self,
        tag_name: Option<&str>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<LivestreamResponse>> {
        let rows = match tag_name {
            Some(name) => {
                let Some(tag) = self.ctx.tags().find_by_name(name) else {
                    debug!(tag = name, "unknown tag");
                    return Ok(Vec::new());
                };
                let mut rows = self
                    .ctx
                    .query(self.ctx.livestream_repo().find_by_tag(tag.id))
                    .await?;
                if let Some(limit) = limit {
                    rows.truncate(usize::try_from(limit).unwrap_or(0));
                }
                rows
            }
            None => {
                self.ctx
                    .query(self.ctx.livestream_repo().list_recent(limit))
                    .await?
            }
        };

        self.assemble_livestreams(&rows).await
    }

    /// Every livestream owned by the named user, newest first
    #[instrument(skip(self))]
    pub async fn livestreams_of_user(&self, name: &str) -> ServiceResult<Vec<LivestreamResponse>> {
        let owner = UserService::new(self.ctx).find_by_name(name).await?;
        let rows = self
            .ctx
            .query(self.ctx.livestream_repo().find_by_owner(owner.id))
            .await?;
        self.assemble_livestreams(&rows).await
    }

    /// The full tag table, ordered by id
    pub fn all_tags(&self) -> TagsResponse {
        TagsResponse {
            tags: self
                .ctx
                .tags()
                .all()
                .into_iter()
                .map(TagResponse::from)
                .collect(),
        }
    }

    /// Drop a livestream after a write to it commits
    pub fn invalidate_livestream(&self, livestream_id: Id) {
        self.ctx.caches().livestreams.invalidate(livestream_id);
        debug!(livestream_id = %livestream_id, "livestream cache entry invalidated");
    }

    // === Helpers ===

    pub(crate) async fn load_livestreams(
        &self,
        ids: &[Id],
    ) -> RepoResult<HashMap<Id, Arc<Livestream>>> {
        let ctx = self.ctx;
        ctx.caches()
            .livestreams
            .get_many(ids, |misses| async move {
                ctx.query(ctx.livestream_repo().find_by_ids(&misses)).await
            })
            .await
    }

    fn assemble_one(
        &self,
        row: &Livestream,
        owners: &HashMap<Id, UserResponse>,
    ) -> ServiceResult<LivestreamResponse> {
        let owner = require_present(owners, "user", row.user_id)?.clone();
        let tags = self
            .ctx
            .tags()
            .resolve(&row.tag_ids)?
            .into_iter()
            .map(TagResponse::from)
            .collect();

        Ok(LivestreamResponse {
            id: row.id,
            owner,
            title: row.title.clone(),
            description: row.description.clone(),
            playlist_url: row.playlist_url.clone(),
            thumbnail_url: row.thumbnail_url.clone(),
            tags,
            start_at: row.start_at,
            end_at: row.end_at,
        })
    }
}
