//! # Domain Services
//!
//! Pure, synchronous functions over domain values. None of them log or
//! perform I/O; they can be called concurrently on independent inputs.
//!
//! - [`InputValidator`]: completeness checks for quote requests
//! - [`ResponseNormalizer`]: carrier API JSON to [`CarrierOffer`](crate::domain::entities::CarrierOffer)s
//! - [`MetricsAggregator`]: per-carrier statistics over persisted quotes

pub mod input_validator;
pub mod metrics_aggregator;
pub mod response_normalizer;

pub use input_validator::InputValidator;
pub use metrics_aggregator::MetricsAggregator;
pub use response_normalizer::ResponseNormalizer;
