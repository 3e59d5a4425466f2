//! # Response Normalizer
//!
//! Turns the carrier API's loosely-typed JSON response into
//! [`CarrierOffer`]s.
//!
//! Expected shape:
//!
//! ```text
//! { "dispatchers": [
//!     { "offers": [
//!         { "carrier": { "name": "..." },
//!           "service": "...",
//!           "final_price": 12.5,
//!           "delivery_time": { "days" | "hours" | "minutes": n } } ] } ] }
//! ```
//!
//! Each nested object is decoded by a function returning
//! `Result<_, FieldError>`; the enclosing stage maps the field error onto its
//! [`NormalizationError`] and stages compose with `?`. The first error aborts
//! the whole call.
//!
//! Deadlines are whole days: `days` wins over `minutes`, which wins over
//! `hours`. Conversions truncate toward zero.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::services::ResponseNormalizer;
//! use serde_json::json;
//!
//! let raw = json!({"dispatchers": [{"offers": [{
//!     "carrier": {"name": "JADLOG"},
//!     "service": ".PACKAGE",
//!     "final_price": 21.5,
//!     "delivery_time": {"hours": 72}
//! }]}]});
//!
//! let offers = ResponseNormalizer::normalize(&raw).unwrap();
//! assert_eq!(offers[0].deadline(), 3);
//! ```

use crate::domain::entities::CarrierOffer;
use crate::domain::errors::{NormalizationError, NormalizationResult};
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;
use thiserror::Error;

const MINUTES_PER_DAY: i64 = 1440;
const HOURS_PER_DAY: i64 = 24;

type Object = Map<String, Value>;

/// Failure to decode a single field of a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
enum FieldError {
    #[error("missing field `{0}`")]
    Missing(&'static str),
    #[error("field `{0}` has the wrong type")]
    TypeMismatch(&'static str),
}

type FieldResult<T> = Result<T, FieldError>;

/// Normalizes carrier API responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Extracts every offer of every dispatcher, flattened in encounter order.
    ///
    /// # Errors
    ///
    /// Returns the [`NormalizationError`] of the first malformed element.
    pub fn normalize(raw: &Value) -> NormalizationResult<Vec<CarrierOffer>> {
        let dispatchers = raw
            .get("dispatchers")
            .ok_or(FieldError::Missing("dispatchers"))
            .and_then(|v| v.as_array().ok_or(FieldError::TypeMismatch("dispatchers")))
            .map_err(|e| match e {
                FieldError::Missing(_) => NormalizationError::MissingDispatchers,
                FieldError::TypeMismatch(_) => NormalizationError::InvalidDispatcherFormat,
            })?;

        let per_dispatcher = dispatchers
            .iter()
            .map(decode_dispatcher)
            .collect::<NormalizationResult<Vec<_>>>()?;

        Ok(per_dispatcher.into_iter().flatten().collect())
    }
}

fn decode_dispatcher(value: &Value) -> NormalizationResult<Vec<CarrierOffer>> {
    let dispatcher = value
        .as_object()
        .ok_or(NormalizationError::InvalidDispatcherFormat)?;
    let offers =
        array_field(dispatcher, "offers").map_err(|_| NormalizationError::MissingOffers)?;
    offers.iter().map(decode_offer).collect()
}

fn decode_offer(value: &Value) -> NormalizationResult<CarrierOffer> {
    let offer = value
        .as_object()
        .ok_or(NormalizationError::InvalidOfferFormat)?;

    let name = object_field(offer, "carrier")
        .and_then(|carrier| str_field(carrier, "name"))
        .map_err(|_| NormalizationError::MissingCarrier)?;
    let deadline = decode_deadline(offer).map_err(|_| NormalizationError::MissingDeliveryTime)?;
    let price = number_field(offer, "final_price")
        .and_then(|n| to_decimal(n).ok_or(FieldError::TypeMismatch("final_price")))
        .map_err(|_| NormalizationError::InvalidOfferFields)?;
    let service =
        str_field(offer, "service").map_err(|_| NormalizationError::InvalidOfferFields)?;

    Ok(CarrierOffer::new(name, service, deadline, price))
}

fn decode_deadline(offer: &Object) -> FieldResult<i64> {
    let delivery = object_field(offer, "delivery_time")?;

    if let Ok(days) = number_field(delivery, "days") {
        return whole_days(days, 1).ok_or(FieldError::TypeMismatch("days"));
    }
    if let Ok(minutes) = number_field(delivery, "minutes") {
        return whole_days(minutes, MINUTES_PER_DAY).ok_or(FieldError::TypeMismatch("minutes"));
    }
    if let Ok(hours) = number_field(delivery, "hours") {
        return whole_days(hours, HOURS_PER_DAY).ok_or(FieldError::TypeMismatch("hours"));
    }
    Err(FieldError::Missing("delivery_time"))
}

/// Converts `n` units to whole days, truncating toward zero.
fn whole_days(n: &Number, units_per_day: i64) -> Option<i64> {
    if let Some(units) = n.as_i64() {
        return Some(units / units_per_day);
    }
    // Float and out-of-range values; `as` saturates at the i64 bounds.
    n.as_f64()
        .map(|units| (units / units_per_day as f64).trunc() as i64)
}

/// Converts through the JSON text so the decimal matches what was sent.
///
/// Returns `None` outside the [`Decimal`] range (about ±7.9e28), which the
/// caller reports as [`NormalizationError::InvalidOfferFields`].
fn to_decimal(n: &Number) -> Option<Decimal> {
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn field<'a>(object: &'a Object, name: &'static str) -> FieldResult<&'a Value> {
    object.get(name).ok_or(FieldError::Missing(name))
}

fn object_field<'a>(object: &'a Object, name: &'static str) -> FieldResult<&'a Object> {
    field(object, name)?
        .as_object()
        .ok_or(FieldError::TypeMismatch(name))
}

fn array_field<'a>(object: &'a Object, name: &'static str) -> FieldResult<&'a Vec<Value>> {
    field(object, name)?
        .as_array()
        .ok_or(FieldError::TypeMismatch(name))
}

fn str_field<'a>(object: &'a Object, name: &'static str) -> FieldResult<&'a str> {
    field(object, name)?
        .as_str()
        .ok_or(FieldError::TypeMismatch(name))
}

fn number_field<'a>(object: &'a Object, name: &'static str) -> FieldResult<&'a Number> {
    match field(object, name)? {
        Value::Number(n) => Ok(n),
        _ => Err(FieldError::TypeMismatch(name)),
    }
}
