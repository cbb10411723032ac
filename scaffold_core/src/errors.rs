//! # Error Types
//!
//! Structured error types for scaffold_core. The estimation engine itself
//! is total and never produces one of these — malformed numeric input is a
//! defined fallback to zero, not an error. Errors exist only at the
//! project-store and JSON-export boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for scaffold_core operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Structured error type for store and export operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ScaffoldError {
    /// No stored project has the given id
    #[error("Project not found: id {id}")]
    ProjectNotFound { id: u64 },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl ScaffoldError {
    /// Create a ProjectNotFound error
    pub fn project_not_found(id: u64) -> Self {
        ScaffoldError::ProjectNotFound { id }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        ScaffoldError::Serialization {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ScaffoldError::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            ScaffoldError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ScaffoldError::project_not_found(42);
        assert_eq!(error.to_string(), "Project not found: id 42");
    }

    #[test]
    fn test_error_serialization() {
        let error = ScaffoldError::serialization("unexpected end of input");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ScaffoldError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ScaffoldError::project_not_found(1).error_code(), "PROJECT_NOT_FOUND");
        assert_eq!(ScaffoldError::serialization("x").error_code(), "SERIALIZATION_ERROR");
    }
}
