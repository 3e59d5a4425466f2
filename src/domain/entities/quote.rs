//! # Quote Entity
//!
//! A persisted record of one normalization result.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::{CarrierOffer, Quote};
//! use rust_decimal::Decimal;
//!
//! let quote = Quote::new(vec![
//!     CarrierOffer::new("Carrier1", "Service1", 2, Decimal::new(10, 0)),
//! ]);
//!
//! assert_eq!(quote.offers().len(), 1);
//! ```

use crate::domain::entities::CarrierOffer;
use crate::domain::value_objects::{QuoteId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The set of carrier offers obtained for one quote request.
///
/// # Invariants
///
/// - Offers keep the order in which the upstream API returned them
/// - `created_at` is assigned once, when the quote is first built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier for this quote.
    id: QuoteId,
    /// Offers in upstream encounter order.
    offers: Vec<CarrierOffer>,
    /// When this quote was created.
    created_at: Timestamp,
}

impl Quote {
    /// Creates a new quote stamped with the current time.
    #[must_use]
    pub fn new(offers: Vec<CarrierOffer>) -> Self {
        Self {
            id: QuoteId::new_v4(),
            offers,
            created_at: Timestamp::now(),
        }
    }

    /// Creates a quote with a specific ID and timestamp (for reconstruction
    /// from storage).
    #[must_use]
    pub fn from_parts(id: QuoteId, offers: Vec<CarrierOffer>, created_at: Timestamp) -> Self {
        Self {
            id,
            offers,
            created_at,
        }
    }

    /// Returns the quote ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> QuoteId {
        self.id
    }

    /// Returns the offers in encounter order.
    #[inline]
    #[must_use]
    pub fn offers(&self) -> &[CarrierOffer] {
        &self.offers
    }

    /// Returns when this quote was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Consumes the quote and returns its offers.
    #[must_use]
    pub fn into_offers(self) -> Vec<CarrierOffer> {
        self.offers
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote({} offers={} at {})",
            self.id,
            self.offers.len(),
            self.created_at
        )
    }
}
