//! # Metrics Report
//!
//! Per-carrier price statistics over a window of persisted quotes.

use crate::domain::entities::CarrierOffer;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price statistics for a single carrier.
///
/// `count` is at least one for every carrier present in a report, so
/// `average_price` is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierMetrics {
    /// Number of offers seen from this carrier.
    pub count: u64,
    /// Sum of the offer prices.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    /// `total_price / count`.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_price: Decimal,
}

/// Snapshot of quote metrics, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Statistics keyed by carrier name.
    pub carriers: BTreeMap<String, CarrierMetrics>,
    /// Lowest-priced offer; the earliest one wins ties.
    #[serde(rename = "cheapest_quote")]
    pub cheapest_offer: Option<CarrierOffer>,
    /// Highest-priced offer; the earliest one wins ties.
    #[serde(rename = "most_expensive_quote")]
    pub most_expensive_offer: Option<CarrierOffer>,
}

impl MetricsReport {
    /// Returns the statistics for a carrier, if it appeared in the window.
    #[must_use]
    pub fn carrier(&self, name: &str) -> Option<&CarrierMetrics> {
        self.carriers.get(name)
    }

    /// Total number of offers that contributed to the report.
    #[must_use]
    pub fn offer_count(&self) -> u64 {
        self.carriers.values().map(|m| m.count).sum()
    }
}
