//! Error type shared by every CoinTracker layer
//!
//! Storage, services and the CLI all return [`CoinResult`]; the binary turns
//! it into an `anyhow` report at the top.

use thiserror::Error;

use crate::models::TransactionValidationError;

/// Everything that can go wrong while tracking coins
#[derive(Error, Debug)]
pub enum CoinError {
    /// The app config could not be located, read or written
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Bad user input: zero amounts, blank sources, negative goals, bad dates
    #[error("Validation error: {0}")]
    Validation(String),

    /// A transaction, profile or quick action that does not exist
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Creating a profile or quick action whose name is taken
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A profile document could not be read, written or removed
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl CoinError {
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for profiles
    pub fn profile_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Profile",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for quick actions
    pub fn quick_action_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Quick action",
            identifier: identifier.into(),
        }
    }

    /// Create the error returned for a negative savings goal
    pub fn invalid_goal(goal: i64) -> Self {
        Self::Validation(format!("Goal must be zero or positive, got {}", goal))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for CoinError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<TransactionValidationError> for CoinError {
    fn from(err: TransactionValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for CoinError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for CoinTracker operations
pub type CoinResult<T> = Result<T, CoinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoinError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CoinError::profile_not_found("Weekend");
        assert_eq!(err.to_string(), "Profile not found: Weekend");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_goal_is_validation() {
        let err = CoinError::invalid_goal(-5);
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Goal must be zero or positive, got -5"
        );
    }

    #[test]
    fn test_duplicate_error() {
        let err = CoinError::Duplicate {
            entity_type: "Profile",
            identifier: "Default".into(),
        };
        assert_eq!(err.to_string(), "Profile already exists: Default");
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_from_transaction_validation_error() {
        let err: CoinError = TransactionValidationError::EmptySource.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Source must not be empty");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let coin_err: CoinError = io_err.into();
        assert!(matches!(coin_err, CoinError::Io(_)));
    }
}
