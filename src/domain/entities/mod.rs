//! # Domain Entities
//!
//! - [`QuoteRequest`]: shipment description submitted for quotation
//! - [`CarrierOffer`]: normalized offer from one carrier
//! - [`Quote`]: persisted set of offers for one request
//! - [`MetricsReport`]: per-carrier statistics over recent quotes

pub mod carrier_offer;
pub mod metrics_report;
pub mod quote;
pub mod quote_request;

pub use carrier_offer::CarrierOffer;
pub use metrics_report::{CarrierMetrics, MetricsReport};
pub use quote::Quote;
pub use quote_request::{Dispatcher, QuoteRequest, Recipient, Shipper, Volume};
