//! Ranking engine
//!
//! Pure functions over score rows. A subject's score is its reaction count
//! plus its tip total. Orders are total: users tie-break on name descending
//! then id, livestreams on id descending. A subject's rank is one plus the
//! number of subjects ordered strictly ahead of it.

use std::cmp::Ordering;

use stream_core::entities::{EmojiCount, LivestreamScore, UserScore};
use stream_core::Id;

use crate::dto::{LivestreamRankingEntry, UserRankingEntry};

/// Leaderboard order for users
pub fn user_order(a: &UserScore, b: &UserScore) -> Ordering {
    b.score()
        .cmp(&a.score())
        .then_with(|| b.name.cmp(&a.name))
        .then_with(|| b.user_id.cmp(&a.user_id))
}

/// Leaderboard order for livestreams
pub fn livestream_order(a: &LivestreamScore, b: &LivestreamScore) -> Ordering {
    b.score()
        .cmp(&a.score())
        .then_with(|| b.livestream_id.cmp(&a.livestream_id))
}

/// Rank of `user_id` among `scores`, or `None` if it has no score row
pub fn user_rank(scores: &[UserScore], user_id: Id) -> Option<i64> {
    let subject = scores.iter().find(|score| score.user_id == user_id)?;
    let ahead = scores
        .iter()
        .filter(|other| user_order(other, subject) == Ordering::Less)
        .count();
    Some(to_rank(ahead))
}

/// Rank of `livestream_id` among `scores`, or `None` if it has no score row
pub fn livestream_rank(scores: &[LivestreamScore], livestream_id: Id) -> Option<i64> {
    let subject = scores
        .iter()
        .find(|score| score.livestream_id == livestream_id)?;
    let ahead = scores
        .iter()
        .filter(|other| livestream_order(other, subject) == Ordering::Less)
        .count();
    Some(to_rank(ahead))
}

/// Users best first, optionally cut to the top `limit`
pub fn user_leaderboard(mut scores: Vec<UserScore>, limit: Option<usize>) -> Vec<UserRankingEntry> {
    scores.sort_by(user_order);
    scores
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(position, score)| UserRankingEntry {
            rank: to_rank(position),
            user_id: score.user_id,
            score: score.score(),
            name: score.name,
        })
        .collect()
}

/// Livestreams best first, optionally cut to the top `limit`
pub fn livestream_leaderboard(
    mut scores: Vec<LivestreamScore>,
    limit: Option<usize>,
) -> Vec<LivestreamRankingEntry> {
    scores.sort_by(livestream_order);
    scores
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(position, score)| LivestreamRankingEntry {
            rank: to_rank(position),
            livestream_id: score.livestream_id,
            score: score.score(),
        })
        .collect()
}

/// Most used emoji; ties go to the lexicographically greatest name
///
/// Empty when there are no reactions.
pub fn favorite_emoji(counts: &[EmojiCount]) -> String {
    counts
        .iter()
        .filter(|emoji| emoji.count > 0)
        .max_by(|a, b| {
            a.count
                .cmp(&b.count)
                .then_with(|| a.emoji_name.cmp(&b.emoji_name))
        })
        .map(|emoji| emoji.emoji_name.clone())
        .unwrap_or_default()
}

fn to_rank(ahead: usize) -> i64 {
    i64::try_from(ahead).map_or(i64::MAX, |n| n + 1)
}
