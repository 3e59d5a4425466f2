//! # Application Services
//!
//! Use cases that orchestrate domain logic and infrastructure.
//!
//! - [`QuoteService`]: validate, simulate, normalize, store
//! - [`MetricsService`]: aggregate the most recent stored quotes

pub mod metrics_service;
pub mod quote_service;

pub use metrics_service::{DEFAULT_LAST_QUOTES, MetricsService};
pub use quote_service::QuoteService;
