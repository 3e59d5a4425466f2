//! # HTTP Client
//!
//! Thin reqwest wrapper used by the carrier API adapter.
//!
//! Every request carries the configured timeout. Non-2xx responses are
//! mapped onto [`CarrierApiError`] by status class. There is no retry loop:
//! a failed call is reported to the caller as-is.

use crate::infrastructure::carrier_api::error::{CarrierApiError, CarrierApiResult};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for the carrier API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `CarrierApiError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> CarrierApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| CarrierApiError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a POST request with JSON body and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `CarrierApiError::Timeout` or `CarrierApiError::Connection`
    /// if the request fails, a status-specific error for non-2xx responses,
    /// and `CarrierApiError::Protocol` if the body cannot be parsed.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> CarrierApiResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> CarrierApiResult<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| CarrierApiError::protocol(format!("Failed to parse response: {}", e)))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a CarrierApiError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> CarrierApiError {
        if error.is_timeout() {
            CarrierApiError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            CarrierApiError::connection(format!("Connection failed: {}", error))
        } else {
            CarrierApiError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a CarrierApiError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> CarrierApiError {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                CarrierApiError::invalid_request(format!("Bad request: {}", body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                CarrierApiError::authentication(format!("Authentication failed: {}", body))
            }
            StatusCode::TOO_MANY_REQUESTS => CarrierApiError::rate_limited("Rate limit exceeded"),
            s if s.is_server_error() => {
                CarrierApiError::unavailable(format!("Server error ({}): {}", status, body))
            }
            _ => CarrierApiError::protocol(format!("HTTP error ({}): {}", status, body)),
        }
    }
}
