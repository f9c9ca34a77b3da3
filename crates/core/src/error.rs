//! Error model shared by the repository, service and handler layers.

use thiserror::Error;

/// Result type used across the quote layers.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Fault raised while producing a greeting or quote.
///
/// Callers at the invocation boundary do not distinguish between variants:
/// every one of them collapses into the same generic error response. The
/// variants exist so logs say where the fault came from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// The backing store rejected or failed an operation.
    #[error("repository failure: {0}")]
    Repository(String),

    /// A remote dependency (KV, D1 worker) could not be reached.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// Anything else.
    #[error("internal error: {0}")]
    Internal(String),
}

impl QuoteError {
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
