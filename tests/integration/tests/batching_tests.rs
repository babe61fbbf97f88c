//! Batching Integration Tests
//!
//! Every assemble call must issue one query per relation, whatever the
//! number of rows handed in.
//!
//! Run with: cargo test -p integration-tests --test batching_tests

use std::sync::Arc;
use std::time::Duration;

use integration_tests::{
    context_for, context_with, id, ids, relation, InMemoryStore, TEST_QUERY_TIMEOUT,
};
use stream_cache::CacheSettings;
use stream_core::entities::Livecomment;
use stream_service::{LivecommentService, LivestreamService, ReportService, UserService};

fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store.add_user(id(1), "alice");
    store.add_user(id(2), "bob");
    store.add_user(id(3), "carol");
    store.add_tag(id(1), "music");
    store.add_tag(id(2), "gaming");
    store.add_tag(id(3), "talk");
    store.add_livestream(id(10), id(1), &ids(&[2, 1]));
    store.add_livestream(id(11), id(2), &[]);
    store.add_livestream(id(12), id(3), &ids(&[1]));
    store
}

fn comment_rows(count: i64) -> Vec<Livecomment> {
    (0..count)
        .map(|n| Livecomment {
            id: id(1_000 + n),
            user_id: id(1 + n % 3),
            livestream_id: id(10 + (n + 1) % 3),
            comment: format!("comment {n}"),
            tip: n,
            created_at: n,
        })
        .collect()
}

// ============================================================================
// Query Count Tests
// ============================================================================

fn query_counts(store: &InMemoryStore) -> [usize; 5] {
    [
        store.calls(relation::USERS),
        store.calls(relation::THEMES),
        store.calls(relation::ICONS),
        store.calls(relation::LIVESTREAMS),
        store.calls(relation::LIVECOMMENTS),
    ]
}

#[tokio::test]
async fn test_query_count_does_not_grow_with_rows() {
    let store = seeded_store();
    let mut counts = Vec::new();

    for rows in [9, 90, 900] {
        let ctx = context_for(&store);
        store.reset_calls();

        let rows = comment_rows(rows);
        let assembled = LivecommentService::new(&ctx)
            .assemble_livecomments(&rows)
            .await
            .unwrap();
        assert_eq!(assembled.len(), rows.len());

        counts.push(query_counts(&store));
    }

    assert_eq!(counts[0], counts[1]);
    assert_eq!(counts[1], counts[2]);

    let [users, themes, icons, livestreams, livecomments] = counts[0];
    assert!((1..=2).contains(&users));
    assert!((1..=2).contains(&themes));
    assert!((1..=2).contains(&icons));
    assert_eq!(livestreams, 1);
    assert_eq!(livecomments, 0);
}

#[tokio::test]
async fn test_warm_caches_skip_cached_relations() {
    let store = seeded_store();
    let settings = CacheSettings {
        user_ttl: Duration::from_secs(60),
        livestream_ttl: Duration::from_secs(60),
    };
    let ctx = context_with(&store, &settings, TEST_QUERY_TIMEOUT);

    let rows = comment_rows(30);
    LivecommentService::new(&ctx)
        .assemble_livecomments(&rows)
        .await
        .unwrap();

    store.reset_calls();
    LivecommentService::new(&ctx)
        .assemble_livecomments(&rows)
        .await
        .unwrap();

    assert_eq!(store.calls(relation::USERS), 0);
    assert_eq!(store.calls(relation::LIVESTREAMS), 0);
    assert_eq!(store.calls(relation::ICONS), 0);
    // Themes are not cached: once for authors, once for owners.
    assert_eq!(store.calls(relation::THEMES), 2);
}

#[tokio::test]
async fn test_output_order_matches_input_order() {
    let store = seeded_store();
    let ctx = context_for(&store);

    let rows = comment_rows(12);
    let assembled = LivecommentService::new(&ctx)
        .assemble_livecomments(&rows)
        .await
        .unwrap();

    let input: Vec<_> = rows.iter().map(|row| row.id).collect();
    let output: Vec<_> = assembled.iter().map(|comment| comment.id).collect();
    assert_eq!(input, output);

    for (row, comment) in rows.iter().zip(&assembled) {
        assert_eq!(comment.user.id, row.user_id);
        assert_eq!(comment.livestream.id, row.livestream_id);
        assert_eq!(comment.tip, row.tip);
    }
}

#[tokio::test]
async fn test_empty_input_issues_no_queries() {
    let store = seeded_store();
    let ctx = context_for(&store);

    let users = UserService::new(&ctx).get_users(&[]).await.unwrap();
    assert!(users.is_empty());

    let livestreams = LivestreamService::new(&ctx)
        .assemble_livestreams(&Vec::new())
        .await
        .unwrap();
    assert!(livestreams.is_empty());

    let comments = LivecommentService::new(&ctx)
        .assemble_livecomments(&Vec::new())
        .await
        .unwrap();
    assert!(comments.is_empty());

    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn test_duplicate_ids_are_fetched_once() {
    let store = seeded_store();
    let ctx = context_for(&store);

    let users = UserService::new(&ctx)
        .get_users(&ids(&[1, 1, 2, 1, 2]))
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(store.calls(relation::USERS), 1);
    assert_eq!(store.calls(relation::THEMES), 1);
}

#[tokio::test]
async fn test_unknown_ids_are_absent() {
    let store = seeded_store();
    let ctx = context_for(&store);

    let users = UserService::new(&ctx)
        .get_users(&ids(&[1, 404]))
        .await
        .unwrap();

    assert!(users.contains_key(&id(1)));
    assert!(!users.contains_key(&id(404)));
}

#[tokio::test]
async fn test_reports_fetch_livecomments_in_one_batch() {
    let store = seeded_store();
    for n in 0..8 {
        store.add_livecomment(id(100 + n), id(1 + n % 3), id(10), 0);
        store.add_report(id(200 + n), id(1 + (n + 1) % 3), id(10), id(100 + n));
    }
    let ctx = context_for(&store);

    let reports = ReportService::new(&ctx).reports_for(id(10)).await.unwrap();

    assert_eq!(reports.len(), 8);
    assert_eq!(store.calls(relation::REPORTS), 1);
    assert_eq!(store.calls(relation::LIVECOMMENTS), 1);
    assert_eq!(store.calls(relation::LIVESTREAMS), 1);
    for report in &reports {
        assert_eq!(report.livecomment.livestream.id, id(10));
    }
}

// ============================================================================
// Row Source Tests
// ============================================================================

#[tokio::test]
async fn test_search_by_tag_newest_first() {
    let store = seeded_store();
    let ctx = context_for(&store);

    let found = LivestreamService::new(&ctx)
        .search_livestreams(Some("music"), None)
        .await
        .unwrap();
    let found_ids: Vec<_> = found.iter().map(|l| l.id).collect();
    assert_eq!(found_ids, ids(&[12, 10]));

    let tag_names: Vec<&str> = found[1].tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tag_names, vec!["gaming", "music"]);

    let limited = LivestreamService::new(&ctx)
        .search_livestreams(Some("music"), Some(1))
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id, id(12));
}

#[tokio::test]
async fn test_search_without_tag_lists_recent() {
    let store = seeded_store();
    let ctx = context_for(&store);

    let recent = LivestreamService::new(&ctx)
        .search_livestreams(None, Some(2))
        .await
        .unwrap();
    let recent_ids: Vec<_> = recent.iter().map(|l| l.id).collect();
    assert_eq!(recent_ids, ids(&[12, 11]));
}

#[tokio::test]
async fn test_unknown_tag_matches_nothing() {
    let store = seeded_store();
    let ctx = context_for(&store);

    let found = LivestreamService::new(&ctx)
        .search_livestreams(Some("cooking"), None)
        .await
        .unwrap();
    assert!(found.is_empty());
    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn test_livestreams_of_user() {
    let store = seeded_store();
    store.add_livestream(id(13), id(1), &[]);
    let ctx = context_for(&store);

    let owned = LivestreamService::new(&ctx)
        .livestreams_of_user("alice")
        .await
        .unwrap();
    let owned_ids: Vec<_> = owned.iter().map(|l| l.id).collect();
    assert_eq!(owned_ids, ids(&[13, 10]));
    assert!(owned.iter().all(|l| l.owner.name == "alice"));
    assert_eq!(store.calls(relation::USERS), 1);

    let err = LivestreamService::new(&ctx)
        .livestreams_of_user("nobody")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_livecomments_for_respects_limit() {
    let store = seeded_store();
    for n in 0..5 {
        store.add_livecomment(id(300 + n), id(2), id(11), n * 10);
    }
    let ctx = context_for(&store);

    let comments = LivecommentService::new(&ctx)
        .livecomments_for(id(11), Some(2))
        .await
        .unwrap();
    let comment_ids: Vec<_> = comments.iter().map(|c| c.id).collect();
    assert_eq!(comment_ids, ids(&[304, 303]));
}

#[tokio::test]
async fn test_reactions_for_livestream() {
    let store = seeded_store();
    store.add_reaction(id(400), id(2), id(10), "fire");
    store.add_reaction(id(401), id(3), id(10), "heart");
    store.add_reaction(id(402), id(3), id(12), "heart");
    let ctx = context_for(&store);

    let reactions = stream_service::ReactionService::new(&ctx)
        .reactions_for(id(10), None)
        .await
        .unwrap();
    let emoji: Vec<&str> = reactions.iter().map(|r| r.emoji_name.as_str()).collect();
    assert_eq!(emoji, vec!["heart", "fire"]);
    assert_eq!(reactions[0].user.name, "carol");
    assert_eq!(reactions[0].livestream.owner.name, "alice");
}
