//! # Carrier API
//!
//! Outbound integration with the carrier quotation service.
//!
//! - [`CarrierQuoteGateway`]: port used by the application layer
//! - [`FreteRapidoClient`]: HTTP adapter for the Frete Rapido API

pub mod error;
pub mod frete_rapido;
pub mod http_client;
pub mod traits;

pub use error::{CarrierApiError, CarrierApiResult};
pub use frete_rapido::{FreteRapidoClient, FreteRapidoConfig};
pub use http_client::HttpClient;
pub use traits::CarrierQuoteGateway;
