//! Status store error types

use thiserror::Error;

/// Errors that can occur while talking to the status store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Failed to reach the store or the connection dropped mid-command
    #[error("Store connection error: {0}")]
    ConnectionError(String),

    /// Store operation did not finish within its time bound
    #[error("Store operation timed out: {0}")]
    Timeout(String),

    /// The store answered, but with an error or an unexpected reply
    #[error("Store backend error: {0}")]
    BackendError(String),

    /// The store address could not be turned into a client
    #[error("Store configuration error: {0}")]
    ConfigurationError(String),
}

impl StoreError {
    /// Whether this error means the store could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ConnectionError(_) | Self::Timeout(_))
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_classification() {
        assert!(StoreError::ConnectionError("refused".into()).is_unavailable());
        assert!(StoreError::Timeout("HGETALL".into()).is_unavailable());
        assert!(!StoreError::BackendError("WRONGTYPE".into()).is_unavailable());
        assert!(!StoreError::ConfigurationError("bad url".into()).is_unavailable());
    }

    #[test]
    fn test_display_includes_detail() {
        let err = StoreError::Timeout("HGETALL exceeded 10000ms".to_string());
        assert_eq!(
            err.to_string(),
            "Store operation timed out: HGETALL exceeded 10000ms"
        );
    }
}
