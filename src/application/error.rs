//! # Application Errors
//!
//! Error type for the application layer.
//!
//! Each use case fails with one [`ApplicationError`], which keeps the layer
//! error it came from so the API can pick a status code.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Validation(ValidationError)       - incomplete quote request
//! ├── Normalization(NormalizationError) - unexpected carrier response shape
//! ├── Aggregation(AggregationError)     - metrics over an empty window
//! ├── CarrierApi(CarrierApiError)       - upstream call failed
//! ├── Repository(RepositoryError)       - storage failed
//! └── Internal(String)
//! ```
//!
//! # Examples
//!
//! ```
//! use freight_quote::application::error::ApplicationError;
//! use freight_quote::domain::errors::ValidationError;
//!
//! let err: ApplicationError = ValidationError::NoDispatchers.into();
//! assert!(err.is_client_error());
//! assert_eq!(err.to_string(), "at least one dispatcher is required");
//! ```

use crate::domain::errors::{AggregationError, NormalizationError, ValidationError};
use crate::infrastructure::carrier_api::CarrierApiError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The quote request is incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The carrier response could not be decoded.
    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    /// Metrics could not be computed.
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    /// The carrier API call failed.
    #[error(transparent)]
    CarrierApi(#[from] CarrierApiError),

    /// Storage failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the caller can fix the failure by changing the
    /// request.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if there was nothing to aggregate.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Aggregation(AggregationError::NoQuotesProvided) => true,
            Self::Repository(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if the carrier API failed or could not be reached.
    #[must_use]
    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::CarrierApi(e) if e.is_upstream_failure())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
