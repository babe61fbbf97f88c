//! Domain errors - error types for the domain layer

use std::time::Duration;

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("User not found: {0}")]
    UserNameNotFound(String),

    #[error("Livestream not found: {0}")]
    LivestreamNotFound(Id),

    // =========================================================================
    // Data Inconsistency
    // =========================================================================
    /// A composite object references a row that does not exist
    #[error("Missing referenced {entity}: {id}")]
    MissingReference { entity: &'static str, id: Id },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Malformed query input, rejected before any I/O
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Query timed out after {0:?}")]
    QueryTimeout(Duration),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Shorthand for a missing reference
    pub fn missing(entity: &'static str, id: Id) -> Self {
        Self::MissingReference { entity, id }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UserNameNotFound(_) => "UNKNOWN_USER",
            Self::LivestreamNotFound(_) => "UNKNOWN_LIVESTREAM",

            // Data inconsistency
            Self::MissingReference { .. } => "MISSING_REFERENCE",

            // Validation
            Self::InvalidQuery(_) => "INVALID_QUERY",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::QueryTimeout(_) => "QUERY_TIMEOUT",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::UserNameNotFound(_) | Self::LivestreamNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidQuery(_))
    }

    /// Check if the underlying store call failed (I/O, timeout)
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::QueryTimeout(_))
    }

    /// Check if this error signals inconsistent stored data
    pub fn is_missing_reference(&self) -> bool {
        matches!(self, Self::MissingReference { .. })
    }
}
