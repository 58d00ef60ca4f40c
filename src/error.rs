//! Error types for the store facades

use thiserror::Error;

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the document store and key-value facades
///
/// Driver errors are carried unmodified so callers see exactly what the
/// underlying client raised.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The connection attempt for a store failed and will not be retried
    #[error("Connection to {store} failed: {message}")]
    ConnectionFailed { store: &'static str, message: String },

    /// A data operation was issued before the store handle existed
    #[error("{store} connection is not ready")]
    NotReady { store: &'static str },

    /// MongoDB driver error
    #[error(transparent)]
    DocumentStore(#[from] mongodb::error::Error),

    /// Redis driver error
    #[error(transparent)]
    KeyValue(#[from] redis::RedisError),

    /// Expiration rejected by the store
    #[error("invalid expire time: {0}")]
    InvalidExpireTime(u64),

    /// Invalid environment configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StoreError {
    /// Create a connection failure error
    pub fn connection_failed<S: Into<String>>(store: &'static str, message: S) -> Self {
        Self::ConnectionFailed {
            store,
            message: message.into(),
        }
    }

    /// Create a not-ready error
    pub fn not_ready(store: &'static str) -> Self {
        Self::NotReady { store }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came from issuing an operation against a store
    /// that never became ready
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady { .. })
    }
}

impl From<config::ConfigError> for StoreError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}
