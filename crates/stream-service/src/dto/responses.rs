//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output. Ids serialize as
//! plain numbers. Composite responses own fully-resolved copies of the
//! entities they reference.

use serde::Serialize;

use stream_core::value_objects::Id;

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeResponse {
    pub id: Id,
    pub dark_mode: bool,
}

/// User with theme and icon hash resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: Id,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub theme: ThemeResponse,
    /// Lowercase hex SHA-256 of the icon image
    pub icon_hash: String,
}

// ============================================================================
// Livestream Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagResponse {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<TagResponse>,
}

/// Livestream with owner and tags resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivestreamResponse {
    pub id: Id,
    pub owner: UserResponse,
    pub title: String,
    pub description: String,
    pub playlist_url: String,
    pub thumbnail_url: String,
    /// In the order stored on the livestream row
    pub tags: Vec<TagResponse>,
    pub start_at: i64,
    pub end_at: i64,
}

// ============================================================================
// Livecomment / Reaction / Report Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivecommentResponse {
    pub id: Id,
    pub user: UserResponse,
    pub livestream: LivestreamResponse,
    pub comment: String,
    pub tip: i64,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionResponse {
    pub id: Id,
    pub emoji_name: String,
    pub user: UserResponse,
    pub livestream: LivestreamResponse,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivecommentReportResponse {
    pub id: Id,
    pub reporter: UserResponse,
    pub livecomment: LivecommentResponse,
    pub created_at: i64,
}

// ============================================================================
// Statistics Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStatisticsResponse {
    pub rank: i64,
    pub viewers_count: i64,
    pub total_reactions: i64,
    pub total_livecomments: i64,
    pub total_tip: i64,
    /// Empty when the user's livestreams have no reactions
    pub favorite_emoji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivestreamStatisticsResponse {
    pub rank: i64,
    pub viewers_count: i64,
    pub total_reactions: i64,
    pub total_reports: i64,
    pub max_tip: i64,
}

/// One row of the user leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRankingEntry {
    pub rank: i64,
    pub user_id: Id,
    pub name: String,
    pub score: i64,
}

/// One row of the livestream leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivestreamRankingEntry {
    pub rank: i64,
    pub livestream_id: Id,
    pub score: i64,
}
