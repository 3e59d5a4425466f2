//! # REST Handlers
//!
//! axum handlers, shared state and the error-to-status mapping.

use crate::application::ApplicationError;
use crate::application::dto::{ErrorResponse, HealthResponse, QuoteResponse};
use crate::application::services::{MetricsService, QuoteService};
use crate::domain::entities::{MetricsReport, QuoteRequest};
use crate::domain::errors::AggregationError;
use crate::infrastructure::carrier_api::CarrierApiError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quote simulation use case.
    pub quote_service: QuoteService,
    /// Metrics use case.
    pub metrics_service: MetricsService,
}

impl AppState {
    /// Creates the state.
    #[must_use]
    pub fn new(quote_service: QuoteService, metrics_service: MetricsService) -> Self {
        Self {
            quote_service,
            metrics_service,
        }
    }
}

/// Query string of `GET /metrics`.
///
/// `last_quotes` stays a raw string so that junk values fall back to the
/// default instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsParams {
    /// Number of most recent quotes to aggregate.
    pub last_quotes: Option<String>,
}

/// Error returned by handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be decoded.
    BadBody(JsonRejection),
    /// Use case failed.
    Application(ApplicationError),
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self::Application(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadBody(rejection)
    }
}

/// Maps an application error to its HTTP status.
#[must_use]
pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Aggregation(AggregationError::NoQuotesProvided) => StatusCode::NOT_FOUND,
        ApplicationError::CarrierApi(CarrierApiError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
        ApplicationError::CarrierApi(CarrierApiError::Internal { .. }) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ApplicationError::CarrierApi(_) => StatusCode::BAD_GATEWAY,
        ApplicationError::Normalization(_)
        | ApplicationError::Aggregation(_)
        | ApplicationError::Repository(_)
        | ApplicationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadBody(rejection) => {
                warn!(error = %rejection.body_text(), "malformed request body");
                (rejection.status(), rejection.body_text())
            }
            Self::Application(error) => (status_for(&error), error.to_string()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// `POST /quote`
///
/// # Errors
///
/// Returns an [`ApiError`] if the body is malformed or the use case fails.
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<QuoteResponse>), ApiError> {
    let Json(request) = body?;
    let quote = state.quote_service.create_quote(&request).await?;
    Ok((StatusCode::CREATED, Json(QuoteResponse::from(quote))))
}

/// `GET /metrics?last_quotes=N`
///
/// # Errors
///
/// Returns an [`ApiError`] if nothing is stored or the lookup fails.
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MetricsParams>,
) -> Result<Json<MetricsReport>, ApiError> {
    let last_quotes = state
        .metrics_service
        .resolve_last_quotes(params.last_quotes.as_deref());
    let report = state.metrics_service.metrics(last_quotes).await?;
    Ok(Json(report))
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{NormalizationError, ValidationError};
    use crate::domain::value_objects::ArithmeticError;
    use crate::infrastructure::persistence::RepositoryError;

    #[test]
    fn status_mapping() {
        let cases: Vec<(ApplicationError, StatusCode)> = vec![
            (ValidationError::NoVolumes.into(), StatusCode::BAD_REQUEST),
            (AggregationError::NoQuotesProvided.into(), StatusCode::NOT_FOUND),
            (
                AggregationError::Arithmetic(ArithmeticError::Overflow).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                NormalizationError::MissingCarrier.into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (CarrierApiError::timeout("slow").into(), StatusCode::GATEWAY_TIMEOUT),
            (CarrierApiError::unavailable("503").into(), StatusCode::BAD_GATEWAY),
            (CarrierApiError::authentication("401").into(), StatusCode::BAD_GATEWAY),
            (
                CarrierApiError::internal("builder").into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                RepositoryError::query("syntax").into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(status_for(&error), expected, "{error}");
        }
    }
}
