//! User service
//!
//! Resolves users through the user cache and assembles them with their theme
//! and icon hash. Also owns the write-side hooks for the user and icon caches.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument};

use stream_core::batch::{require_present, unique_ids};
use stream_core::entities::User;
use stream_core::error::DomainError;
use stream_core::traits::RepoResult;
use stream_core::Id;

use crate::dto::{ThemeResponse, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve users by id, keyed by id
    ///
    /// Unknown ids are absent from the result. Callers that need every id
    /// decide whether absence is a not-found or a missing reference.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn get_users(&self, ids: &[Id]) -> ServiceResult<HashMap<Id, UserResponse>> {
        let users = self.load_users(ids).await?;
        self.assemble_users(users.values().map(AsRef::as_ref)).await
    }

    /// Resolve one user by id
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Id) -> ServiceResult<UserResponse> {
        let mut users = self.get_users(&[user_id]).await?;
        users
            .remove(&user_id)
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Resolve one user by login name; bypasses the id-keyed cache
    #[instrument(skip(self))]
    pub async fn get_user_by_name(&self, name: &str) -> ServiceResult<UserResponse> {
        let user = self.find_by_name(name).await?;
        let mut users = self.assemble_users(std::iter::once(&user)).await?;
        users
            .remove(&user.id)
            .ok_or_else(|| DomainError::UserNameNotFound(name.to_string()).into())
    }

    /// Build user responses for rows already in hand
    ///
    /// One theme query for the whole set, icon hashes through the icon cache.
    /// A user without a theme row fails the call with `MissingReference`.
    pub async fn assemble_users<'u, I>(&self, users: I) -> ServiceResult<HashMap<Id, UserResponse>>
    where
        I: IntoIterator<Item = &'u User>,
    {
        let users: Vec<&User> = users.into_iter().collect();
        let ids = unique_ids(users.iter().map(|user| user.id));
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let (themes, icons) = tokio::try_join!(
            self.ctx.query(self.ctx.theme_repo().find_by_user_ids(&ids)),
            self.load_icon_hashes(&ids),
        )?;

        let assembled = users
            .into_iter()
            .map(|user| {
                let theme = require_present(&themes, "theme", user.id)?;
                let hash = require_present(&icons, "icon", user.id)?;
                Ok((user.id, UserResponse::assemble(user, theme, hash.as_str())))
            })
            .collect::<Result<HashMap<_, _>, DomainError>>()?;

        Ok(assembled)
    }

    /// Icon hashes for `user_ids`, fallback-substituted
    ///
    /// Ids that are not users are absent from the result and never reach the
    /// icon cache.
    #[instrument(skip(self, user_ids), fields(count = user_ids.len()))]
    pub async fn icon_hashes(&self, user_ids: &[Id]) -> ServiceResult<HashMap<Id, String>> {
        let users = self.load_users(user_ids).await?;
        let known = unique_ids(user_ids.iter().copied().filter(|id| users.contains_key(id)));
        let hashes = self.load_icon_hashes(&known).await?;
        Ok(hashes
            .into_iter()
            .map(|(id, hash)| (id, hash.as_ref().clone()))
            .collect())
    }

    /// Theme of the named user
    ///
    /// # Errors
    /// `UserNameNotFound` for an unknown name, `MissingReference` when the
    /// user has no theme row.
    #[instrument(skip(self))]
    pub async fn theme_of(&self, name: &str) -> ServiceResult<ThemeResponse> {
        let user = self.find_by_name(name).await?;
        let wanted = [user.id];
        let themes = self
            .ctx
            .query(self.ctx.theme_repo().find_by_user_ids(&wanted))
            .await?;
        let theme = require_present(&themes, "theme", user.id)?;
        Ok(ThemeResponse::from(theme))
    }

    // === Cache hooks for write paths ===

    /// Drop a user after a profile write commits
    pub fn invalidate_user(&self, user_id: Id) {
        self.ctx.caches().users.invalidate(user_id);
        debug!(user_id = %user_id, "user cache entry invalidated");
    }

    /// Drop an icon hash after an icon write commits
    pub fn invalidate_icon(&self, user_id: Id) {
        self.ctx.caches().icon_hashes.invalidate(user_id);
        debug!(user_id = %user_id, "icon cache entry invalidated");
    }

    /// Store the hash a writer just committed, so the next read skips the store
    pub fn update_icon_hash(&self, user_id: Id, hash: impl Into<String>) {
        self.ctx.caches().icon_hashes.put(user_id, hash.into());
        debug!(user_id = %user_id, "icon cache entry replaced");
    }

    /// Drop every icon hash after a bulk icon change
    pub fn purge_icon_cache(&self) {
        self.ctx.caches().icon_hashes.purge_all();
    }

    // === Helpers ===

    pub(crate) async fn load_users(&self, ids: &[Id]) -> RepoResult<HashMap<Id, Arc<User>>> {
        let ctx = self.ctx;
        ctx.caches()
            .users
            .get_many(ids, |misses| async move {
                ctx.query(ctx.user_repo().find_by_ids(&misses)).await
            })
            .await
    }

    pub(crate) async fn find_by_name(&self, name: &str) -> RepoResult<User> {
        self.ctx
            .query(self.ctx.user_repo().find_by_name(name))
            .await?
            .ok_or_else(|| DomainError::UserNameNotFound(name.to_string()))
    }

    /// Users without an icon row get the fallback hash, and that hash is
    /// cached like any other until the icon is written.
    async fn load_icon_hashes(&self, user_ids: &[Id]) -> RepoResult<HashMap<Id, Arc<String>>> {
        let ctx = self.ctx;
        ctx.caches()
            .icon_hashes
            .get_many(user_ids, |misses| async move {
                let mut hashes = ctx
                    .query(ctx.icon_repo().find_hashes_by_user_ids(&misses))
                    .await?;
                let fallback = ctx.fallback_icon().hash();
                for id in misses {
                    hashes.entry(id).or_insert_with(|| fallback.to_string());
                }
                Ok::<_, DomainError>(hashes)
            })
            .await
    }
}
