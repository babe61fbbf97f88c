//! Entity Cache Integration Tests
//!
//! Lifetimes, write-side hooks and concurrent access of the user, icon-hash
//! and livestream caches as seen through the services.
//!
//! Run with: cargo test -p integration-tests --test cache_tests

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use integration_tests::{
    context_for, context_with, fallback_icon, id, ids, relation, InMemoryStore,
    TEST_QUERY_TIMEOUT,
};
use stream_cache::CacheSettings;
use stream_core::DomainError;
use stream_service::{LivestreamService, UserService};

fn store_with_users(count: i64) -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    for n in 1..=count {
        store.add_user(id(n), &format!("user{n}"));
    }
    store
}

// ============================================================================
// TTL Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_user_cache_expires_after_ttl() {
    let store = store_with_users(3);
    let ctx = context_for(&store);
    let users = UserService::new(&ctx);

    let first = users.get_users(&ids(&[1, 2, 3])).await.unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(store.calls(relation::USERS), 1);

    tokio::time::advance(Duration::from_millis(500)).await;
    users.get_users(&ids(&[1, 2, 3])).await.unwrap();
    assert_eq!(store.calls(relation::USERS), 1);

    tokio::time::advance(Duration::from_millis(600)).await;
    let third = users.get_users(&ids(&[1, 2, 3])).await.unwrap();
    assert_eq!(third.len(), 3);
    assert_eq!(store.calls(relation::USERS), 2);
}

#[tokio::test(start_paused = true)]
async fn test_livestream_cache_uses_its_own_ttl() {
    let store = store_with_users(1);
    store.add_livestream(id(10), id(1), &[]);
    let ctx = context_for(&store);
    let livestreams = LivestreamService::new(&ctx);

    livestreams.get_livestream(id(10)).await.unwrap();
    tokio::time::advance(Duration::from_secs(29)).await;
    livestreams.get_livestream(id(10)).await.unwrap();
    assert_eq!(store.calls(relation::LIVESTREAMS), 1);

    tokio::time::advance(Duration::from_secs(2)).await;
    livestreams.get_livestream(id(10)).await.unwrap();
    assert_eq!(store.calls(relation::LIVESTREAMS), 2);
}

#[tokio::test(start_paused = true)]
async fn test_stale_user_until_ttl() {
    let store = store_with_users(1);
    let ctx = context_for(&store);
    let users = UserService::new(&ctx);

    assert_eq!(users.get_user(id(1)).await.unwrap().name, "user1");

    store.remove_user(id(1));
    store.add_user(id(1), "renamed");
    assert_eq!(users.get_user(id(1)).await.unwrap().name, "user1");

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(users.get_user(id(1)).await.unwrap().name, "renamed");
}

// ============================================================================
// Invalidation Tests
// ============================================================================

#[tokio::test]
async fn test_update_icon_hash_is_read_back_without_fetch() {
    let store = store_with_users(7);
    let ctx = context_for(&store);
    let users = UserService::new(&ctx);

    users.update_icon_hash(id(7), "deadbeef");

    let hashes = users.icon_hashes(&[id(7)]).await.unwrap();
    assert_eq!(hashes[&id(7)], "deadbeef");
    assert_eq!(store.calls(relation::ICONS), 0);

    let user = users.get_user(id(7)).await.unwrap();
    assert_eq!(user.icon_hash, "deadbeef");
    assert_eq!(store.calls(relation::ICONS), 0);
}

#[tokio::test]
async fn test_update_icon_hash_replaces_cached_value() {
    let store = store_with_users(7);
    let ctx = context_for(&store);
    let users = UserService::new(&ctx);

    let before = users.get_user(id(7)).await.unwrap();
    assert_eq!(before.icon_hash, fallback_icon().hash());
    assert_eq!(store.calls(relation::ICONS), 1);

    let hash = store.set_icon(id(7), b"new icon");
    users.update_icon_hash(id(7), hash.clone());

    let after = users.get_user(id(7)).await.unwrap();
    assert_eq!(after.icon_hash, hash);
    assert_eq!(store.calls(relation::ICONS), 1);
}

#[tokio::test]
async fn test_icon_hash_never_expires_until_invalidated() {
    let store = store_with_users(1);
    let ctx = context_for(&store);
    let users = UserService::new(&ctx);

    users.icon_hashes(&[id(1)]).await.unwrap();
    let hash = store.set_icon(id(1), b"uploaded");

    let stale = users.icon_hashes(&[id(1)]).await.unwrap();
    assert_eq!(stale[&id(1)], fallback_icon().hash());
    assert_eq!(store.calls(relation::ICONS), 1);

    users.invalidate_icon(id(1));
    let fresh = users.icon_hashes(&[id(1)]).await.unwrap();
    assert_eq!(fresh[&id(1)], hash);
    assert_eq!(store.calls(relation::ICONS), 2);
}

#[tokio::test]
async fn test_purge_icon_cache_refetches_everything() {
    let store = store_with_users(4);
    let ctx = context_for(&store);
    let users = UserService::new(&ctx);

    users.icon_hashes(&ids(&[1, 2, 3, 4])).await.unwrap();
    users.purge_icon_cache();
    assert!(ctx.caches().icon_hashes.is_empty());

    users.icon_hashes(&ids(&[1, 2, 3, 4])).await.unwrap();
    assert_eq!(store.calls(relation::ICONS), 2);
}

#[tokio::test]
async fn test_invalidate_user_refetches() {
    let store = store_with_users(2);
    let settings = CacheSettings {
        user_ttl: Duration::from_secs(3600),
        ..CacheSettings::default()
    };
    let ctx = context_with(&store, &settings, TEST_QUERY_TIMEOUT);
    let users = UserService::new(&ctx);

    users.get_users(&ids(&[1, 2])).await.unwrap();
    users.invalidate_user(id(2));
    users.get_users(&ids(&[1, 2])).await.unwrap();

    assert_eq!(store.calls(relation::USERS), 2);
    assert!(ctx.caches().users.peek(id(1)).is_some());
    assert!(ctx.caches().users.peek(id(2)).is_some());
}

#[tokio::test]
async fn test_invalidate_livestream_refetches() {
    let store = store_with_users(1);
    store.add_livestream(id(10), id(1), &[]);
    let ctx = context_for(&store);
    let livestreams = LivestreamService::new(&ctx);

    let before = livestreams.get_livestream(id(10)).await.unwrap();
    store.rename_livestream(id(10), "new title");

    let cached = livestreams.get_livestream(id(10)).await.unwrap();
    assert_eq!(cached.title, before.title);

    livestreams.invalidate_livestream(id(10));
    let fresh = livestreams.get_livestream(id(10)).await.unwrap();
    assert_eq!(fresh.title, "new title");
}

#[tokio::test(start_paused = true)]
async fn test_writes_to_other_users_keep_in_flight_fill() {
    let store = store_with_users(3);
    store.set_latency(Some(Duration::from_millis(20)));
    let settings = CacheSettings {
        user_ttl: Duration::from_secs(60),
        ..CacheSettings::default()
    };
    let ctx = context_with(&store, &settings, TEST_QUERY_TIMEOUT);
    let users = UserService::new(&ctx);

    let wanted = ids(&[1, 2]);
    let (found, ()) = tokio::join!(users.get_users(&wanted), async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        users.invalidate_user(id(3));
        users.update_icon_hash(id(3), "hash-3".to_string());
    });
    assert_eq!(found.unwrap().len(), 2);

    store.reset_calls();
    let warm = users.get_users(&ids(&[1, 2])).await.unwrap();
    assert_eq!(warm.len(), 2);
    assert_eq!(store.total_calls(), 0);
}

// ============================================================================
// Fallback Icon Tests
// ============================================================================

#[tokio::test]
async fn test_users_without_icon_share_fallback_hash() {
    let store = store_with_users(3);
    let uploaded = store.set_icon(id(3), b"custom");
    let ctx = context_for(&store);

    let users = UserService::new(&ctx)
        .get_users(&ids(&[1, 2, 3]))
        .await
        .unwrap();

    let fallback = fallback_icon();
    assert_eq!(users[&id(1)].icon_hash, fallback.hash());
    assert_eq!(users[&id(2)].icon_hash, fallback.hash());
    assert_eq!(users[&id(3)].icon_hash, uploaded);
    assert_ne!(uploaded, fallback.hash());
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_failed_fetch_caches_nothing() {
    let store = store_with_users(2);
    let ctx = context_for(&store);
    let users = UserService::new(&ctx);

    store.set_failing(true);
    let err = users.get_users(&ids(&[1, 2])).await.unwrap_err();
    assert!(matches!(err.domain(), Some(DomainError::DatabaseError(_))));
    assert_eq!(err.status_code(), 500);
    assert!(ctx.caches().users.is_empty());
    assert!(ctx.caches().icon_hashes.is_empty());

    store.set_failing(false);
    let users = users.get_users(&ids(&[1, 2])).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(store.calls(relation::USERS), 2);
}

#[tokio::test]
async fn test_failed_fetch_discards_hits() {
    let store = store_with_users(3);
    let ctx = context_for(&store);
    let users = UserService::new(&ctx);

    users.get_users(&[id(1)]).await.unwrap();

    store.set_failing(true);
    let result = users.get_users(&ids(&[1, 2, 3])).await;
    assert!(result.is_err());
    assert!(ctx.caches().users.peek(id(2)).is_none());
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_overlapping_lookups() {
    let store = store_with_users(40);
    let settings = CacheSettings {
        user_ttl: Duration::from_millis(5),
        ..CacheSettings::default()
    };
    let ctx = context_with(&store, &settings, TEST_QUERY_TIMEOUT);

    let tasks = (0..16).map(|task: i64| {
        let ctx = ctx.clone();
        tokio::spawn(async move {
            let users = UserService::new(&ctx);
            for round in 0..50 {
                let start = (task * 3 + round) % 30 + 1;
                let wanted: Vec<_> = (start..start + 10).map(id).collect();

                if round % 7 == 0 {
                    users.invalidate_user(wanted[0]);
                    users.update_icon_hash(wanted[1], format!("hash-{}", wanted[1]));
                }

                let found = users.get_users(&wanted).await.unwrap();
                assert_eq!(found.len(), wanted.len());
                for user_id in &wanted {
                    let user = &found[user_id];
                    assert_eq!(user.id, *user_id);
                    assert_eq!(user.name, format!("user{user_id}"));
                    assert_eq!(user.theme.id.into_inner(), user_id.into_inner() + 100_000);
                }
            }
        })
    });

    let finished = tokio::time::timeout(Duration::from_secs(30), join_all(tasks))
        .await
        .expect("lookups deadlocked");
    for result in finished {
        result.expect("lookup task panicked");
    }
}
