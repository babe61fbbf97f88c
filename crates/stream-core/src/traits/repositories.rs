//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Every `find_by_*_ids` method is a batched lookup: implementations
//! de-duplicate the input, return an empty map without touching the store
//! when the input is empty, and otherwise issue exactly one query.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::{
    EmojiCount, Livecomment, LivecommentReport, Livestream, LivestreamScore, LivestreamTotals,
    Reaction, Tag, Theme, User, UserScore, UserTotals,
};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Batched lookup by user id; absent ids are absent from the map
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<HashMap<Id, User>>;

    /// Find user by unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// Theme Repository
// ============================================================================

#[async_trait]
pub trait ThemeRepository: Send + Sync {
    /// Batched lookup keyed by user id
    async fn find_by_user_ids(&self, user_ids: &[Id]) -> RepoResult<HashMap<Id, Theme>>;
}

// ============================================================================
// Icon Repository
// ============================================================================

#[async_trait]
pub trait IconRepository: Send + Sync {
    /// Batched icon hash lookup keyed by user id
    ///
    /// Users without an icon row are absent; the caller substitutes the
    /// fallback hash.
    async fn find_hashes_by_user_ids(&self, user_ids: &[Id]) -> RepoResult<HashMap<Id, String>>;
}

// ============================================================================
// Livestream Repository
// ============================================================================

#[async_trait]
pub trait LivestreamRepository: Send + Sync {
    /// Batched lookup by livestream id
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<HashMap<Id, Livestream>>;

    /// Most recent livestreams first, optionally limited
    async fn list_recent(&self, limit: Option<i64>) -> RepoResult<Vec<Livestream>>;

    /// Livestreams owned by a user, most recent first
    async fn find_by_owner(&self, user_id: Id) -> RepoResult<Vec<Livestream>>;

    /// Livestreams carrying a tag, most recent first
    async fn find_by_tag(&self, tag_id: Id) -> RepoResult<Vec<Livestream>>;
}

// ============================================================================
// Livecomment Repository
// ============================================================================

#[async_trait]
pub trait LivecommentRepository: Send + Sync {
    /// Batched lookup by livecomment id
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<HashMap<Id, Livecomment>>;

    /// Comments on a livestream, newest first, optionally limited
    async fn find_by_livestream(
        &self,
        livestream_id: Id,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Livecomment>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Reactions on a livestream, newest first, optionally limited
    async fn find_by_livestream(
        &self,
        livestream_id: Id,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Reaction>>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Reports grouped by livestream; every requested id has an entry
    async fn find_by_livestream_ids(
        &self,
        livestream_ids: &[Id],
    ) -> RepoResult<HashMap<Id, Vec<LivecommentReport>>>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Every tag, used once at start-up to build the tag table
    async fn find_all(&self) -> RepoResult<Vec<Tag>>;
}

// ============================================================================
// Statistics Repository
// ============================================================================

#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    /// Ranking inputs for every user, including users with no activity
    async fn user_scores(&self) -> RepoResult<Vec<UserScore>>;

    /// Ranking inputs for every livestream, including idle ones
    async fn livestream_scores(&self) -> RepoResult<Vec<LivestreamScore>>;

    /// Totals over the livestreams a user owns
    async fn user_totals(&self, user_id: Id) -> RepoResult<UserTotals>;

    /// Emoji usage over the livestreams a user owns
    async fn user_emoji_counts(&self, user_id: Id) -> RepoResult<Vec<EmojiCount>>;

    /// Totals for one livestream
    async fn livestream_totals(&self, livestream_id: Id) -> RepoResult<LivestreamTotals>;
}
