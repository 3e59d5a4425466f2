//! # Metrics Service
//!
//! Reports on the most recent stored quotes.

use crate::application::error::ApplicationResult;
use crate::domain::entities::MetricsReport;
use crate::domain::services::MetricsAggregator;
use crate::infrastructure::persistence::QuoteRepository;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Window size used when the caller gives none or an unusable one.
pub const DEFAULT_LAST_QUOTES: usize = 10;

/// Use case for `GET /metrics`.
#[derive(Debug, Clone)]
pub struct MetricsService {
    repository: Arc<dyn QuoteRepository>,
    default_last_quotes: usize,
}

impl MetricsService {
    /// Creates a new MetricsService.
    #[must_use]
    pub fn new(repository: Arc<dyn QuoteRepository>) -> Self {
        Self {
            repository,
            default_last_quotes: DEFAULT_LAST_QUOTES,
        }
    }

    /// Sets the default window size.
    #[must_use]
    pub fn with_default_last_quotes(mut self, default_last_quotes: usize) -> Self {
        self.default_last_quotes = default_last_quotes;
        self
    }

    /// Returns the default window size.
    #[must_use]
    pub fn default_last_quotes(&self) -> usize {
        self.default_last_quotes
    }

    /// Parses the raw `last_quotes` query value.
    ///
    /// Anything other than a positive integer falls back to the default.
    #[must_use]
    pub fn resolve_last_quotes(&self, raw: Option<&str>) -> usize {
        match raw.map(|s| s.trim().parse::<i64>()) {
            Some(Ok(n)) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => {
                warn!(
                    last_quotes = raw.unwrap_or_default(),
                    default = self.default_last_quotes,
                    "invalid last_quotes parameter, using default"
                );
                self.default_last_quotes
            }
        }
    }

    /// Aggregates the `last_quotes` most recent quotes.
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::NoQuotesProvided` if nothing is stored, or
    /// a repository error if the lookup fails.
    pub async fn metrics(&self, last_quotes: usize) -> ApplicationResult<MetricsReport> {
        let quotes = self.repository.find_recent(last_quotes).await.map_err(|e| {
            error!(error = %e, "failed to fetch quotes");
            e
        })?;
        debug!(requested = last_quotes, found = quotes.len(), "aggregating quotes");

        Ok(MetricsAggregator::aggregate(&quotes)?)
    }
}
