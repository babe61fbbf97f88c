//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use stream_core::error::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Clamp a caller-supplied limit; `None` means "no limit" and binds as NULL
pub fn bind_limit(limit: Option<i64>) -> Option<i64> {
    limit.map(|n| n.max(0))
}
