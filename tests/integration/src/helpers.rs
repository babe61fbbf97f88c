//! Test helpers for integration tests
//!
//! Wires an [`InMemoryStore`] into every repository slot of a
//! `ServiceContext`, and provides `id` shorthands.

use std::sync::Arc;
use std::time::Duration;

use stream_cache::{CacheSettings, EntityCaches};
use stream_core::entities::FallbackIcon;
use stream_core::Id;
use stream_service::ServiceContext;

use crate::fixtures::InMemoryStore;

/// Image bytes used as the fallback icon in tests
pub const FALLBACK_IMAGE: &[u8] = b"no-image";

/// Query deadline used unless a test overrides it
pub const TEST_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

pub fn id(raw: i64) -> Id {
    Id::new(raw)
}

pub fn ids(raw: &[i64]) -> Vec<Id> {
    raw.iter().copied().map(Id::new).collect()
}

pub fn fallback_icon() -> FallbackIcon {
    FallbackIcon::from_bytes(FALLBACK_IMAGE.to_vec())
}

/// Context over `store` with default cache lifetimes
pub fn context_for(store: &Arc<InMemoryStore>) -> ServiceContext {
    context_with(store, &CacheSettings::default(), TEST_QUERY_TIMEOUT)
}

/// Context over `store` with explicit cache lifetimes and query deadline
///
/// The tag table is snapshotted from the store at this point, the same way
/// the production context loads it once at start-up.
pub fn context_with(
    store: &Arc<InMemoryStore>,
    settings: &CacheSettings,
    query_timeout: Duration,
) -> ServiceContext {
    ServiceContext::builder()
        .user_repo(store.clone())
        .theme_repo(store.clone())
        .icon_repo(store.clone())
        .livestream_repo(store.clone())
        .livecomment_repo(store.clone())
        .reaction_repo(store.clone())
        .report_repo(store.clone())
        .statistics_repo(store.clone())
        .caches(EntityCaches::new(settings))
        .tags(store.tag_table())
        .fallback_icon(fallback_icon())
        .query_timeout(query_timeout)
        .build()
        .expect("every dependency is provided")
}
