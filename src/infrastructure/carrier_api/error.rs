//! # Carrier API Errors
//!
//! Transport-level failures talking to the carrier quotation API.
//!
//! These are distinct from
//! [`NormalizationError`](crate::domain::errors::NormalizationError), which
//! reports a response that arrived but has the wrong shape.
//!
//! # Examples
//!
//! ```
//! use freight_quote::infrastructure::carrier_api::CarrierApiError;
//!
//! let error = CarrierApiError::timeout("Request timed out after 10000ms");
//! assert!(error.is_timeout());
//!
//! let error = CarrierApiError::authentication("Invalid token");
//! assert!(!error.is_timeout());
//! ```

use thiserror::Error;

/// Error type for carrier API calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarrierApiError {
    /// Request timed out.
    #[error("carrier api timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("carrier api connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Token or platform code rejected.
    #[error("carrier api authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("carrier api rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// The API rejected the request body.
    #[error("carrier api invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The API answered with a server-side failure.
    #[error("carrier api unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },

    /// Unexpected status or undecodable body.
    #[error("carrier api protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// Local failure building the client or request.
    #[error("carrier api internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl CarrierApiError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the call timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns true if the carrier API itself failed or could not be reached,
    /// as opposed to rejecting our request.
    #[must_use]
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::Connection { .. }
                | Self::Unavailable { .. }
                | Self::Protocol { .. }
        )
    }
}

/// Result type for carrier API calls.
pub type CarrierApiResult<T> = Result<T, CarrierApiError>;
