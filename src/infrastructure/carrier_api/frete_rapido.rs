//! # Frete Rapido Client
//!
//! [`CarrierQuoteGateway`] backed by the Frete Rapido simulation endpoint.
//!
//! # Examples
//!
//! ```
//! use freight_quote::infrastructure::carrier_api::{FreteRapidoClient, FreteRapidoConfig};
//!
//! let config = FreteRapidoConfig::new("https://sp.freterapido.com/api/v3/quote/simulate")
//!     .with_timeout_ms(5_000);
//! let client = FreteRapidoClient::new(config).unwrap();
//! assert_eq!(client.config().timeout_ms, 5_000);
//! ```

use crate::domain::entities::QuoteRequest;
use crate::infrastructure::carrier_api::error::CarrierApiResult;
use crate::infrastructure::carrier_api::http_client::HttpClient;
use crate::infrastructure::carrier_api::traits::CarrierQuoteGateway;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Default simulation endpoint.
pub const DEFAULT_API_URL: &str = "https://sp.freterapido.com/api/v3/quote/simulate";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for [`FreteRapidoClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreteRapidoConfig {
    /// Full URL of the simulation endpoint.
    pub api_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl FreteRapidoConfig {
    /// Creates a config for `api_url` with the default timeout.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Default for FreteRapidoConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Frete Rapido API client.
#[derive(Debug, Clone)]
pub struct FreteRapidoClient {
    config: FreteRapidoConfig,
    http: HttpClient,
}

impl FreteRapidoClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `CarrierApiError::Internal` if the HTTP client cannot be built.
    pub fn new(config: FreteRapidoConfig) -> CarrierApiResult<Self> {
        let http = HttpClient::new(config.timeout_ms)?;
        Ok(Self { config, http })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &FreteRapidoConfig {
        &self.config
    }
}

#[async_trait]
impl CarrierQuoteGateway for FreteRapidoClient {
    fn name(&self) -> &str {
        "frete-rapido"
    }

    #[instrument(skip_all, fields(dispatchers = request.dispatchers.len()))]
    async fn simulate(&self, request: &QuoteRequest) -> CarrierApiResult<Value> {
        debug!(url = %self.config.api_url, "posting quote simulation");
        self.http.post(&self.config.api_url, request).await
    }
}
