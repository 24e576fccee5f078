//! Custom error types for CareLink
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for CareLink operations
#[derive(Error, Debug)]
pub enum CarelinkError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Device sync errors
    #[error("Sync error: {0}")]
    Sync(String),
}

impl CarelinkError {
    /// Create a "not found" error for loved ones
    pub fn loved_one_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Loved one",
            identifier: identifier.into(),
        }
    }
}

/// Result type alias for CareLink operations
pub type CarelinkResult<T> = Result<T, CarelinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CarelinkError::Config("device id must not be blank".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: device id must not be blank"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = CarelinkError::loved_one_not_found("face-550e8400");
        assert_eq!(err.to_string(), "Loved one not found: face-550e8400");
    }

    #[test]
    fn test_sync_error_display() {
        let err = CarelinkError::Sync("device unreachable".into());
        assert_eq!(err.to_string(), "Sync error: device unreachable");
    }
}
