//! # Quote Service
//!
//! Runs a freight simulation end to end.
//!
//! The pipeline is strictly sequential and stops at the first failure:
//!
//! 1. [`InputValidator`] checks the request
//! 2. the [`CarrierQuoteGateway`] posts it upstream
//! 3. [`ResponseNormalizer`] turns the raw body into offers
//! 4. the offers are stored as a [`Quote`]
//!
//! Nothing is persisted unless every earlier step succeeded.

use crate::application::error::ApplicationResult;
use crate::domain::entities::{Quote, QuoteRequest};
use crate::domain::services::{InputValidator, ResponseNormalizer};
use crate::infrastructure::carrier_api::CarrierQuoteGateway;
use crate::infrastructure::persistence::QuoteRepository;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Use case for `POST /quote`.
#[derive(Debug, Clone)]
pub struct QuoteService {
    gateway: Arc<dyn CarrierQuoteGateway>,
    repository: Arc<dyn QuoteRepository>,
}

impl QuoteService {
    /// Creates a new QuoteService.
    #[must_use]
    pub fn new(gateway: Arc<dyn CarrierQuoteGateway>, repository: Arc<dyn QuoteRepository>) -> Self {
        Self {
            gateway,
            repository,
        }
    }

    /// Validates, simulates, normalizes and stores a quote.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    #[instrument(skip_all, fields(gateway = self.gateway.name()))]
    pub async fn create_quote(&self, request: &QuoteRequest) -> ApplicationResult<Quote> {
        if let Err(e) = InputValidator::validate(request) {
            warn!(error = %e, "rejected quote request");
            return Err(e.into());
        }

        let raw = self.gateway.simulate(request).await.map_err(|e| {
            error!(error = %e, "carrier api call failed");
            e
        })?;

        let offers = ResponseNormalizer::normalize(&raw).map_err(|e| {
            error!(error = %e, "unexpected carrier api response");
            e
        })?;

        let quote = Quote::new(offers);
        self.repository.save(&quote).await.map_err(|e| {
            error!(error = %e, quote_id = %quote.id(), "failed to store quote");
            e
        })?;

        info!(quote_id = %quote.id(), offers = quote.offers().len(), "quote created");
        Ok(quote)
    }
}
