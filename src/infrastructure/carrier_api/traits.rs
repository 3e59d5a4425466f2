//! # Carrier Quote Gateway
//!
//! Port definition for the upstream carrier quotation API.
//!
//! The gateway hands back the raw JSON tree untouched. Turning it into
//! typed offers is the job of
//! [`ResponseNormalizer`](crate::domain::services::ResponseNormalizer).

use crate::domain::entities::QuoteRequest;
use crate::infrastructure::carrier_api::error::CarrierApiResult;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Upstream source of freight simulations.
#[async_trait]
pub trait CarrierQuoteGateway: Send + Sync + fmt::Debug {
    /// Returns a short name for logging.
    fn name(&self) -> &str;

    /// Submits `request` and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierApiError`](super::CarrierApiError) if the call
    /// fails or the response is not JSON.
    async fn simulate(&self, request: &QuoteRequest) -> CarrierApiResult<Value>;
}
