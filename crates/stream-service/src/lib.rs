//! # stream-service
//!
//! Application layer: assembles composite responses from batched lookups and
//! entity caches, and computes ranking statistics.

pub mod dto;
pub mod ranking;
pub mod services;

pub use services::{
    LivecommentService, LivestreamService, ReactionService, ReportService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StatisticsService, UserService,
};
