//! # Domain Errors
//!
//! Error types produced by the pure domain services.
//!
//! ```text
//! ValidationError      - quote request rejected before it goes upstream
//! NormalizationError   - carrier API response violates its contract
//! AggregationError     - metrics could not be computed
//! ```
//!
//! Every error is terminal for the operation that produced it: no partial
//! result is ever returned alongside one.

use crate::domain::value_objects::ArithmeticError;
use thiserror::Error;

/// Reason a [`QuoteRequest`](crate::domain::entities::QuoteRequest) is not
/// eligible for submission.
///
/// Checks run top to bottom and the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// Shipper registered number, token or platform code is empty.
    #[error("shipper information is incomplete")]
    ShipperIncomplete,

    /// Recipient type, country or zipcode is missing or out of range.
    #[error("recipient information is incomplete")]
    RecipientIncomplete,

    /// The request has no dispatchers.
    #[error("at least one dispatcher is required")]
    NoDispatchers,

    /// A dispatcher is missing its registered number or zipcode.
    #[error("dispatcher information is incomplete")]
    DispatcherIncomplete,

    /// A dispatcher has no volumes.
    #[error("at least one volume is required for each dispatcher")]
    NoVolumes,

    /// A volume has an empty category or a non-positive quantity or measure.
    #[error("volume information is incomplete or invalid")]
    VolumeInvalid,
}

/// The carrier API response does not have the expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NormalizationError {
    /// Top-level `dispatchers` key is absent.
    #[error("invalid dispatchers data from API response")]
    MissingDispatchers,

    /// `dispatchers` is not an array, or one of its entries is not an object.
    #[error("invalid dispatcher format in API response")]
    InvalidDispatcherFormat,

    /// A dispatcher has no `offers` array.
    #[error("missing offers in dispatcher")]
    MissingOffers,

    /// An entry of `offers` is not an object.
    #[error("invalid offering format in dispatcher")]
    InvalidOfferFormat,

    /// An offer has no `carrier.name` string.
    #[error("missing carrier in offering")]
    MissingCarrier,

    /// `delivery_time` holds none of `days`, `hours` or `minutes`.
    #[error("missing days, hours, or minutes in delivery_time")]
    MissingDeliveryTime,

    /// `final_price` or `service` is absent or has the wrong type.
    #[error("missing or invalid offer fields in API response")]
    InvalidOfferFields,
}

/// Error type for metrics aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AggregationError {
    /// The quote window handed to the aggregator was empty.
    #[error("no quotes provided")]
    NoQuotesProvided,

    /// Accumulating totals overflowed.
    #[error("aggregation arithmetic failed: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

/// Result type for request validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for response normalization.
pub type NormalizationResult<T> = Result<T, NormalizationError>;

/// Result type for metrics aggregation.
pub type AggregationResult<T> = Result<T, AggregationError>;
