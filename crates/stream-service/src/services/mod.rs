//! Read-path services
//!
//! Each service borrows the shared [`ServiceContext`] and resolves every
//! reference of a batch of rows with one lookup per relation.

pub mod context;
pub mod error;
pub mod livecomment;
pub mod livestream;
pub mod reaction;
pub mod report;
pub mod statistics;
pub mod user;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use livecomment::LivecommentService;
pub use livestream::LivestreamService;
pub use reaction::ReactionService;
pub use report::ReportService;
pub use statistics::StatisticsService;
pub use user::UserService;
