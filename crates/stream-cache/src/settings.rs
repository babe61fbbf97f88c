//! Cache lifetimes and the set of caches held by the service context.

use std::time::Duration;

use stream_core::entities::{Livestream, User};

use crate::entity_cache::{CachePolicy, EntityCache};

/// Lifetimes for the TTL-governed caches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    pub user_ttl: Duration,
    pub livestream_ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            user_ttl: Duration::from_secs(1),
            livestream_ttl: Duration::from_secs(30),
        }
    }
}

impl From<&stream_common::CacheConfig> for CacheSettings {
    fn from(config: &stream_common::CacheConfig) -> Self {
        Self {
            user_ttl: config.user_ttl(),
            livestream_ttl: config.livestream_ttl(),
        }
    }
}

/// Every entity cache the read path uses, one policy each
///
/// Users carry a short TTL since profile edits are not invalidated
/// explicitly. Icon hashes change only through the icon upload path, which
/// invalidates or replaces the entry after commit.
#[derive(Debug)]
pub struct EntityCaches {
    pub users: EntityCache<User>,
    pub icon_hashes: EntityCache<String>,
    pub livestreams: EntityCache<Livestream>,
}

impl EntityCaches {
    pub fn new(settings: &CacheSettings) -> Self {
        Self {
            users: EntityCache::new("users", CachePolicy::Ttl(settings.user_ttl)),
            icon_hashes: EntityCache::new("icon_hashes", CachePolicy::InvalidateOnWrite),
            livestreams: EntityCache::new(
                "livestreams",
                CachePolicy::Ttl(settings.livestream_ttl),
            ),
        }
    }
}

impl Default for EntityCaches {
    fn default() -> Self {
        Self::new(&CacheSettings::default())
    }
}
