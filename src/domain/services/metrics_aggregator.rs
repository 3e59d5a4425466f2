//! # Metrics Aggregator
//!
//! Folds a window of persisted quotes into a [`MetricsReport`].
//!
//! Every offer of every quote contributes to its carrier's count and total
//! price. The cheapest and most expensive offers are tracked across the whole
//! window; an offer only replaces the current extreme when it is strictly
//! cheaper (or strictly more expensive), so the earliest offer wins ties.

use crate::domain::entities::{CarrierMetrics, CarrierOffer, MetricsReport, Quote};
use crate::domain::errors::{AggregationError, AggregationResult};
use crate::domain::value_objects::CheckedArithmetic;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Running `(count, total_price)` per carrier.
type Totals = BTreeMap<String, (u64, Decimal)>;

/// Running `(cheapest, most_expensive)` pair.
type Extremes<'a> = (Option<&'a CarrierOffer>, Option<&'a CarrierOffer>);

/// Computes quote metrics.
///
/// Stateless: every call recomputes the report from its input.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::entities::{CarrierOffer, Quote};
/// use freight_quote::domain::services::MetricsAggregator;
/// use rust_decimal::Decimal;
///
/// let quotes = vec![Quote::new(vec![
///     CarrierOffer::new("Carrier1", "Service1", 2, Decimal::new(10, 0)),
/// ])];
///
/// let report = MetricsAggregator::aggregate(&quotes).unwrap();
/// assert_eq!(report.carrier("Carrier1").unwrap().count, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Aggregates the offers of `quotes`.
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::NoQuotesProvided` if `quotes` is empty and
    /// `AggregationError::Arithmetic` if a carrier total overflows.
    pub fn aggregate(quotes: &[Quote]) -> AggregationResult<MetricsReport> {
        if quotes.is_empty() {
            return Err(AggregationError::NoQuotesProvided);
        }

        let offers = || quotes.iter().flat_map(|q| q.offers().iter());

        let totals = offers().try_fold(Totals::new(), accumulate)?;
        let (cheapest, most_expensive) = offers().fold((None, None), track_extremes);

        let carriers = totals
            .into_iter()
            .map(|(name, (count, total_price))| -> AggregationResult<(String, CarrierMetrics)> {
                let average_price = total_price.safe_div(Decimal::from(count))?;
                Ok((
                    name,
                    CarrierMetrics {
                        count,
                        total_price,
                        average_price,
                    },
                ))
            })
            .collect::<AggregationResult<_>>()?;

        Ok(MetricsReport {
            carriers,
            cheapest_offer: cheapest.cloned(),
            most_expensive_offer: most_expensive.cloned(),
        })
    }
}

fn accumulate(mut totals: Totals, offer: &CarrierOffer) -> AggregationResult<Totals> {
    let (count, total) = totals
        .entry(offer.name().to_string())
        .or_insert((0, Decimal::ZERO));
    *count = count.safe_add(1)?;
    *total = total.safe_add(offer.price())?;
    Ok(totals)
}

fn track_extremes<'a>(
    (cheapest, most_expensive): Extremes<'a>,
    offer: &'a CarrierOffer,
) -> Extremes<'a> {
    let cheapest = match cheapest {
        Some(current) if offer.price() >= current.price() => Some(current),
        _ => Some(offer),
    };
    let most_expensive = match most_expensive {
        Some(current) if offer.price() <= current.price() => Some(current),
        _ => Some(offer),
    };
    (cheapest, most_expensive)
}
