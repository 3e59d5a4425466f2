//! # Input Validator
//!
//! Completeness checks run on a [`QuoteRequest`] before it is sent to the
//! carrier API.
//!
//! Checks run top to bottom and stop at the first failure:
//!
//! 1. shipper credentials
//! 2. recipient type, country and zipcode
//! 3. at least one dispatcher
//! 4. per dispatcher: registered number and zipcode, then at least one volume
//! 5. per volume: category, amount, weight, price and dimensions
//!
//! A dispatcher's volumes are checked before the next dispatcher's header.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::QuoteRequest;
//! use freight_quote::domain::errors::ValidationError;
//! use freight_quote::domain::services::InputValidator;
//!
//! let err = InputValidator::validate(&QuoteRequest::default()).unwrap_err();
//! assert_eq!(err, ValidationError::ShipperIncomplete);
//! ```

use crate::domain::entities::{Dispatcher, QuoteRequest, Recipient, Shipper, Volume};
use crate::domain::errors::{ValidationError, ValidationResult};
use rust_decimal::Decimal;

/// Validates quote requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator;

impl InputValidator {
    /// Validates a quote request.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing check.
    pub fn validate(request: &QuoteRequest) -> ValidationResult<()> {
        Self::validate_shipper(&request.shipper)?;
        Self::validate_recipient(&request.recipient)?;
        Self::validate_dispatchers(&request.dispatchers)
    }

    fn validate_shipper(shipper: &Shipper) -> ValidationResult<()> {
        if shipper.registered_number.is_empty()
            || shipper.token.is_empty()
            || shipper.platform_code.is_empty()
        {
            return Err(ValidationError::ShipperIncomplete);
        }
        Ok(())
    }

    fn validate_recipient(recipient: &Recipient) -> ValidationResult<()> {
        if !recipient.has_known_type() || recipient.country.is_empty() || recipient.zipcode == 0 {
            return Err(ValidationError::RecipientIncomplete);
        }
        Ok(())
    }

    fn validate_dispatchers(dispatchers: &[Dispatcher]) -> ValidationResult<()> {
        if dispatchers.is_empty() {
            return Err(ValidationError::NoDispatchers);
        }
        dispatchers.iter().try_for_each(Self::validate_dispatcher)
    }

    fn validate_dispatcher(dispatcher: &Dispatcher) -> ValidationResult<()> {
        if dispatcher.registered_number.is_empty() || dispatcher.zipcode == 0 {
            return Err(ValidationError::DispatcherIncomplete);
        }
        if dispatcher.volumes.is_empty() {
            return Err(ValidationError::NoVolumes);
        }
        dispatcher.volumes.iter().try_for_each(Self::validate_volume)
    }

    fn validate_volume(volume: &Volume) -> ValidationResult<()> {
        let measures = [
            volume.unitary_weight,
            volume.unitary_price,
            volume.height,
            volume.width,
            volume.length,
        ];
        if volume.category.is_empty()
            || volume.amount <= 0
            || measures.iter().any(|m| *m <= Decimal::ZERO)
        {
            return Err(ValidationError::VolumeInvalid);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume() -> Volume {
        Volume {
            amount: 1,
            category: "7".to_string(),
            height: Decimal::new(2, 1),
            width: Decimal::new(2, 1),
            length: Decimal::new(2, 1),
            unitary_price: Decimal::new(349, 0),
            unitary_weight: Decimal::new(5, 0),
        }
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher {
            registered_number: "25438296000158".to_string(),
            zipcode: 29161376,
            volumes: vec![volume()],
        }
    }

    fn valid_request() -> QuoteRequest {
        QuoteRequest {
            shipper: Shipper {
                registered_number: "25438296000158".to_string(),
                token: "1d52a9b6b78cf07b08586152459a5c90".to_string(),
                platform_code: "5AKVkHqCn".to_string(),
            },
            recipient: Recipient {
                recipient_type: Recipient::INDIVIDUAL,
                country: "BRA".to_string(),
                zipcode: 1311000,
            },
            dispatchers: vec![dispatcher()],
            simulation_type: vec![0],
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(InputValidator::validate(&valid_request()), Ok(()));
    }

    #[test]
    fn company_recipient_passes() {
        let mut request = valid_request();
        request.recipient.recipient_type = Recipient::COMPANY;
        assert_eq!(InputValidator::validate(&request), Ok(()));
    }

    #[test]
    fn simulation_type_is_not_checked() {
        let mut request = valid_request();
        request.simulation_type.clear();
        assert_eq!(InputValidator::validate(&request), Ok(()));
    }

    mod shipper {
        use super::*;

        #[test]
        fn empty_shipper() {
            let mut request = valid_request();
            request.shipper = Shipper::default();
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::ShipperIncomplete)
            );
        }

        #[test]
        fn each_field_is_required() {
            for field in 0..3 {
                let mut request = valid_request();
                match field {
                    0 => request.shipper.registered_number.clear(),
                    1 => request.shipper.token.clear(),
                    _ => request.shipper.platform_code.clear(),
                }
                assert_eq!(
                    InputValidator::validate(&request),
                    Err(ValidationError::ShipperIncomplete),
                    "field #{field}"
                );
            }
        }
    }

    mod recipient {
        use super::*;

        #[test]
        fn empty_recipient() {
            let mut request = valid_request();
            request.recipient = Recipient::default();
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::RecipientIncomplete)
            );
        }

        #[test]
        fn missing_country() {
            let mut request = valid_request();
            request.recipient.country.clear();
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::RecipientIncomplete)
            );
        }

        #[test]
        fn zero_zipcode() {
            let mut request = valid_request();
            request.recipient.zipcode = 0;
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::RecipientIncomplete)
            );
        }

        #[test]
        fn negative_zipcode_is_accepted() {
            let mut request = valid_request();
            request.recipient.zipcode = -1311000;
            assert_eq!(InputValidator::validate(&request), Ok(()));
        }

        #[test]
        fn unknown_type() {
            for recipient_type in [-1, 2, 99] {
                let mut request = valid_request();
                request.recipient.recipient_type = recipient_type;
                assert_eq!(
                    InputValidator::validate(&request),
                    Err(ValidationError::RecipientIncomplete)
                );
            }
        }
    }

    mod dispatchers {
        use super::*;

        #[test]
        fn no_dispatchers() {
            let mut request = valid_request();
            request.dispatchers.clear();
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::NoDispatchers)
            );
        }

        #[test]
        fn missing_registered_number() {
            let mut request = valid_request();
            request.dispatchers[0].registered_number.clear();
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::DispatcherIncomplete)
            );
        }

        #[test]
        fn zero_zipcode() {
            let mut request = valid_request();
            request.dispatchers[0].zipcode = 0;
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::DispatcherIncomplete)
            );
        }

        #[test]
        fn no_volumes() {
            let mut request = valid_request();
            request.dispatchers[0].volumes.clear();
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::NoVolumes)
            );
        }

        #[test]
        fn header_checked_before_volumes() {
            let mut request = valid_request();
            request.dispatchers[0] = Dispatcher::default();
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::DispatcherIncomplete)
            );
        }

        #[test]
        fn first_dispatcher_volumes_checked_before_second_header() {
            let mut request = valid_request();
            request.dispatchers[0].volumes[0].amount = 0;
            request.dispatchers.push(Dispatcher::default());
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::VolumeInvalid)
            );
        }

        #[test]
        fn later_dispatcher_is_checked() {
            let mut request = valid_request();
            let mut second = dispatcher();
            second.volumes.clear();
            request.dispatchers.push(second);
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::NoVolumes)
            );
        }
    }

    mod volumes {
        use super::*;

        fn with_volume(edit: impl FnOnce(&mut Volume)) -> QuoteRequest {
            let mut request = valid_request();
            edit(&mut request.dispatchers[0].volumes[0]);
            request
        }

        #[test]
        fn empty_volume() {
            let request = with_volume(|v| *v = Volume::default());
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::VolumeInvalid)
            );
        }

        #[test]
        fn empty_category() {
            let request = with_volume(|v| v.category.clear());
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::VolumeInvalid)
            );
        }

        #[test]
        fn zero_amount() {
            let request = with_volume(|v| v.amount = 0);
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::VolumeInvalid)
            );
        }

        #[test]
        fn negative_amount() {
            let request = with_volume(|v| v.amount = -1);
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::VolumeInvalid)
            );
        }

        #[test]
        fn non_positive_measures() {
            let edits: [fn(&mut Volume); 5] = [
                |v| v.unitary_weight = Decimal::ZERO,
                |v| v.unitary_price = Decimal::new(-1, 0),
                |v| v.height = Decimal::ZERO,
                |v| v.width = Decimal::ZERO,
                |v| v.length = Decimal::new(-5, 1),
            ];
            for edit in edits {
                assert_eq!(
                    InputValidator::validate(&with_volume(edit)),
                    Err(ValidationError::VolumeInvalid)
                );
            }
        }

        #[test]
        fn second_volume_is_checked() {
            let mut request = valid_request();
            let mut bad = volume();
            bad.category.clear();
            request.dispatchers[0].volumes.push(bad);
            assert_eq!(
                InputValidator::validate(&request),
                Err(ValidationError::VolumeInvalid)
            );
        }
    }

    #[test]
    fn first_failure_wins() {
        let mut request = valid_request();
        request.recipient.country.clear();
        request.dispatchers.clear();
        assert_eq!(
            InputValidator::validate(&request),
            Err(ValidationError::RecipientIncomplete)
        );

        request.shipper.token.clear();
        assert_eq!(
            InputValidator::validate(&request),
            Err(ValidationError::ShipperIncomplete)
        );
    }
}
