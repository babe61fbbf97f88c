//! Data transfer objects for read-path responses
//!
//! This module provides:
//! - Response DTOs for serializing composite outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod responses;

pub use responses::{
    LivecommentReportResponse, LivecommentResponse, LivestreamRankingEntry,
    LivestreamResponse, LivestreamStatisticsResponse, ReactionResponse, TagResponse,
    TagsResponse, ThemeResponse, UserRankingEntry, UserResponse, UserStatisticsResponse,
};
