//! # Freight Quote Service
//!
//! HTTP service that simulates freight quotes against the Frete Rapido
//! carrier API, stores every successful simulation, and reports per-carrier
//! price statistics over the most recent ones.
//!
//! ## Architecture
//!
//! The crate is layered:
//!
//! - **Domain Layer** (`domain`): request validation, response normalization and metrics aggregation
//! - **Application Layer** (`application`): quote and metrics use cases
//! - **Infrastructure Layer** (`infrastructure`): carrier API client and quote repositories
//! - **API Layer** (`api`): REST endpoints
//!
//! ## Example
//!
//! ```rust,ignore
//! use freight_quote::application::services::QuoteService;
//!
//! let quote = QuoteService::new(gateway, repository)
//!     .create_quote(&request)
//!     .await?;
//! println!("{} offers", quote.offers().len());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
