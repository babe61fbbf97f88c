//! Ranking and Statistics Integration Tests
//!
//! Run with: cargo test -p integration-tests --test statistics_tests

use std::sync::Arc;

use integration_tests::{context_for, id, relation, InMemoryStore};
use stream_core::DomainError;
use stream_service::StatisticsService;

/// Users A, B and C own livestreams 10, 11 and 12 with scores 10, 10 and 5
fn ranked_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store.add_user(id(1), "A");
    store.add_user(id(2), "B");
    store.add_user(id(3), "C");
    store.add_user(id(4), "viewer");

    store.add_livestream(id(10), id(1), &[]);
    store.add_livestream(id(11), id(2), &[]);
    store.add_livestream(id(12), id(3), &[]);

    let mut next = 1_000;
    let mut react = |livestream: i64, emoji: &str| {
        store.add_reaction(id(next), id(4), id(livestream), emoji);
        next += 1;
    };
    for _ in 0..10 {
        react(10, "smile");
    }
    react(11, "fire");
    react(11, "fire");
    react(11, "heart");
    react(11, "heart");
    for _ in 0..5 {
        react(12, "clap");
    }

    store.add_livecomment(id(2_000), id(4), id(11), 6);
    store.add_livecomment(id(2_001), id(4), id(11), 0);
    store.add_report(id(3_000), id(1), id(11), id(2_001));
    store.add_viewer(id(4), id(11));
    store.add_viewer(id(1), id(11));
    store
}

// ============================================================================
// Leaderboard Tests
// ============================================================================

#[tokio::test]
async fn test_user_ranking_breaks_ties_on_name() {
    let store = ranked_store();
    let ctx = context_for(&store);

    let board = StatisticsService::new(&ctx)
        .user_leaderboard(Some(3))
        .await
        .unwrap();
    let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
    let ranks: Vec<i64> = board.iter().map(|e| e.rank).collect();
    let scores: Vec<i64> = board.iter().map(|e| e.score).collect();

    assert_eq!(names, vec!["B", "A", "C"]);
    assert_eq!(ranks, vec![1, 2, 3]);
    assert_eq!(scores, vec![10, 10, 5]);
}

#[tokio::test]
async fn test_livestream_ranking_breaks_ties_on_id() {
    let store = ranked_store();
    let ctx = context_for(&store);

    let board = StatisticsService::new(&ctx)
        .livestream_leaderboard(None)
        .await
        .unwrap();
    let order: Vec<i64> = board.iter().map(|e| e.livestream_id.into_inner()).collect();
    assert_eq!(order, vec![11, 10, 12]);
}

#[tokio::test]
async fn test_ranking_is_stable_across_calls() {
    let store = ranked_store();
    let ctx = context_for(&store);
    let statistics = StatisticsService::new(&ctx);

    let first = statistics.user_leaderboard(None).await.unwrap();
    for _ in 0..5 {
        assert_eq!(statistics.user_leaderboard(None).await.unwrap(), first);
    }
}

// ============================================================================
// User Statistics Tests
// ============================================================================

#[tokio::test]
async fn test_user_statistics() {
    let store = ranked_store();
    let ctx = context_for(&store);
    let statistics = StatisticsService::new(&ctx);

    let b = statistics.user_statistics("B").await.unwrap();
    assert_eq!(b.rank, 1);
    assert_eq!(b.viewers_count, 2);
    assert_eq!(b.total_reactions, 4);
    assert_eq!(b.total_livecomments, 2);
    assert_eq!(b.total_tip, 6);
    assert_eq!(b.favorite_emoji, "heart");

    let a = statistics.user_statistics("A").await.unwrap();
    assert_eq!(a.rank, 2);
    assert_eq!(a.favorite_emoji, "smile");
    assert_eq!(a.viewers_count, 0);
}

#[tokio::test]
async fn test_user_without_livestreams() {
    let store = ranked_store();
    let ctx = context_for(&store);

    let stats = StatisticsService::new(&ctx)
        .user_statistics("viewer")
        .await
        .unwrap();
    assert_eq!(stats.rank, 4);
    assert_eq!(stats.total_reactions, 0);
    assert_eq!(stats.total_tip, 0);
    assert_eq!(stats.favorite_emoji, "");
}

#[tokio::test]
async fn test_blank_username_is_rejected_before_io() {
    let store = ranked_store();
    let ctx = context_for(&store);

    for name in ["", "   "] {
        let err = StatisticsService::new(&ctx)
            .user_statistics(name)
            .await
            .unwrap_err();
        assert!(matches!(err.domain(), Some(DomainError::InvalidQuery(_))));
        assert_eq!(err.status_code(), 400);
    }
    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let store = ranked_store();
    let ctx = context_for(&store);

    let err = StatisticsService::new(&ctx)
        .user_statistics("ghost")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status_code(), 404);
    assert_eq!(store.calls(relation::STATISTICS), 0);
}

// ============================================================================
// Livestream Statistics Tests
// ============================================================================

#[tokio::test]
async fn test_livestream_statistics() {
    let store = ranked_store();
    let ctx = context_for(&store);

    let stats = StatisticsService::new(&ctx)
        .livestream_statistics(id(11))
        .await
        .unwrap();
    assert_eq!(stats.rank, 1);
    assert_eq!(stats.viewers_count, 2);
    assert_eq!(stats.total_reactions, 4);
    assert_eq!(stats.total_reports, 1);
    assert_eq!(stats.max_tip, 6);
}

#[tokio::test]
async fn test_livestream_without_comments_has_zero_max_tip() {
    let store = ranked_store();
    let ctx = context_for(&store);

    let stats = StatisticsService::new(&ctx)
        .livestream_statistics(id(12))
        .await
        .unwrap();
    assert_eq!(stats.rank, 3);
    assert_eq!(stats.max_tip, 0);
    assert_eq!(stats.total_reports, 0);
}

#[tokio::test]
async fn test_unknown_livestream_statistics() {
    let store = ranked_store();
    let ctx = context_for(&store);

    let err = StatisticsService::new(&ctx)
        .livestream_statistics(id(404))
        .await
        .unwrap_err();
    assert!(matches!(
        err.domain(),
        Some(DomainError::LivestreamNotFound(missing)) if missing.into_inner() == 404
    ));
}

#[tokio::test]
async fn test_statistics_are_not_cached() {
    let store = ranked_store();
    let ctx = context_for(&store);
    let statistics = StatisticsService::new(&ctx);

    let before = statistics.livestream_statistics(id(12)).await.unwrap();
    store.add_livecomment(id(2_100), id(4), id(12), 50);
    let after = statistics.livestream_statistics(id(12)).await.unwrap();

    assert_eq!(before.max_tip, 0);
    assert_eq!(after.max_tip, 50);
    assert_eq!(after.rank, 1);
}
