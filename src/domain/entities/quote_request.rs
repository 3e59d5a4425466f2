//! # Quote Request
//!
//! The shipment description a client submits for quotation.
//!
//! Field names on the wire are contractual: the same JSON shape is accepted
//! from clients and forwarded to the carrier API. Missing fields decode to
//! their zero value so that incompleteness is reported by
//! [`InputValidator`](crate::domain::services::InputValidator) rather than by
//! the JSON decoder.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::QuoteRequest;
//!
//! let request: QuoteRequest = serde_json::from_str(r#"{
//!     "shipper": {"registered_number": "25438296000158", "token": "t", "platform_code": "p"},
//!     "recipient": {"type": 0, "country": "BRA", "zipcode": 29161376},
//!     "dispatchers": [],
//!     "simulation_type": [0]
//! }"#).unwrap();
//!
//! assert_eq!(request.recipient.country, "BRA");
//! assert!(request.dispatchers.is_empty());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A freight quotation request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    /// Account on whose behalf the quote is requested.
    pub shipper: Shipper,
    /// Destination of the shipment.
    pub recipient: Recipient,
    /// Shipment origins with their volumes.
    pub dispatchers: Vec<Dispatcher>,
    /// Carrier-side simulation modes, forwarded verbatim.
    pub simulation_type: Vec<i32>,
}

/// Credentials identifying the shipper to the carrier API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipper {
    /// Company registration number (CNPJ).
    pub registered_number: String,
    /// API token.
    pub token: String,
    /// Platform code issued by the carrier API.
    pub platform_code: String,
}

/// Shipment destination.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipient {
    /// Recipient kind: `0` for an individual, `1` for a company.
    #[serde(rename = "type")]
    pub recipient_type: i32,
    /// Destination country code.
    pub country: String,
    /// Destination postal code.
    pub zipcode: i64,
}

impl Recipient {
    /// Recipient type code for an individual.
    pub const INDIVIDUAL: i32 = 0;
    /// Recipient type code for a company.
    pub const COMPANY: i32 = 1;

    /// Returns true if the recipient type is one the carrier API accepts.
    #[must_use]
    pub fn has_known_type(&self) -> bool {
        matches!(self.recipient_type, Self::INDIVIDUAL | Self::COMPANY)
    }
}

/// A shipment origin and the volumes leaving from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dispatcher {
    /// Company registration number of the origin.
    pub registered_number: String,
    /// Origin postal code.
    pub zipcode: i64,
    /// Physical volumes to ship.
    pub volumes: Vec<Volume>,
}

/// A group of identical packages.
///
/// Measures are in metres, weight in kilograms, price in the shipper's
/// currency; the carrier API defines the units, this crate only checks they
/// are positive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    /// Number of packages.
    pub amount: i64,
    /// Carrier product category code.
    pub category: String,
    /// Package height.
    #[serde(with = "rust_decimal::serde::float")]
    pub height: Decimal,
    /// Package width.
    #[serde(with = "rust_decimal::serde::float")]
    pub width: Decimal,
    /// Package length.
    #[serde(with = "rust_decimal::serde::float")]
    pub length: Decimal,
    /// Declared value of one package.
    #[serde(with = "rust_decimal::serde::float")]
    pub unitary_price: Decimal,
    /// Weight of one package.
    #[serde(with = "rust_decimal::serde::float")]
    pub unitary_weight: Decimal,
}
