//! Unified error system for Tally
//!
//! A single flat error type keeps the app core portable: workflows return
//! `Result<T, TallyError>` and frontends decide how to present each variant.

use serde::{Deserialize, Serialize};

/// Unified error type for all Tally operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum TallyError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Bridge operation failed (persistence, network)
    #[error("Bridge error: {message}")]
    Bridge {
        /// Error message describing the bridge failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl TallyError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a bridge error
    pub fn bridge(message: impl Into<String>) -> Self {
        Self::Bridge {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            TallyError::not_found("report missing").to_string(),
            "Not found: report missing"
        );
        assert_eq!(
            TallyError::bridge("offline").to_string(),
            "Bridge error: offline"
        );
    }
}
