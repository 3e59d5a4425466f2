//! # REST API
//!
//! HTTP endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /quote` - Simulate freight for a shipment; `201` with `{"carrier": [...]}`
//! - `GET /metrics?last_quotes=N` - Statistics over the N most recent quotes
//! - `GET /health` - Liveness check
//!
//! Failures answer with `{"error": "<message>"}`.
//!
//! # Usage
//!
//! ```ignore
//! use freight_quote::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(quote_service, metrics_service));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, MetricsParams, status_for};
pub use routes::create_router;
