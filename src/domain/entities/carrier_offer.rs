//! # Carrier Offer
//!
//! One carrier's priced, timed shipping proposal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized carrier offer.
///
/// Produced by the
/// [`ResponseNormalizer`](crate::domain::services::ResponseNormalizer) and
/// immutable afterwards. The deadline is always expressed in whole days.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::entities::CarrierOffer;
/// use rust_decimal::Decimal;
///
/// let offer = CarrierOffer::new("CORREIOS", "PAC", 5, Decimal::new(7843, 2));
/// assert_eq!(offer.deadline(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarrierOffer {
    name: String,
    service: String,
    deadline: i64,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
}

impl CarrierOffer {
    /// Creates an offer.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        service: impl Into<String>,
        deadline: i64,
        price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            service: service.into(),
            deadline,
            price,
        }
    }

    /// Carrier name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Carrier service level.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Delivery deadline in days.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> i64 {
        self.deadline
    }

    /// Final price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl fmt::Display for CarrierOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {} in {}d",
            self.name, self.service, self.price, self.deadline
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_price_as_number() {
        let offer = CarrierOffer::new("Carrier1", "Service1", 2, Decimal::new(105, 1));
        let value = serde_json::to_value(&offer).unwrap();
        assert_eq!(
            value,
            json!({"name": "Carrier1", "service": "Service1", "deadline": 2, "price": 10.5})
        );
    }

    #[test]
    fn display() {
        let offer = CarrierOffer::new("JADLOG", ".PACKAGE", 3, Decimal::new(2150, 2));
        assert_eq!(offer.to_string(), "JADLOG .PACKAGE @ 21.50 in 3d");
    }
}
