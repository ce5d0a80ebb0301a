use crate::config::ValidationConfig;
use crate::domain::payment::PaymentRequest;
use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashSet;
use thiserror::Error;

const CARD_NUMBER_LENGTH: std::ops::RangeInclusive<usize> = 14..=19;
const CVV_LENGTH: std::ops::RangeInclusive<usize> = 3..=4;

/// The first rule a payment request broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("card number must be 14 to 19 characters long, got {0}")]
    CardNumberLength(usize),
    #[error("card number must only contain digits")]
    CardNumberNotNumeric,
    #[error("expiry month {0} is outside 1-12")]
    ExpiryMonth(i32),
    #[error("card expired in {month:02}/{year}")]
    CardExpired { month: i32, year: i32 },
    #[error("currency {0:?} is not supported")]
    UnsupportedCurrency(String),
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(i64),
    #[error("cvv must be 3 or 4 digits")]
    InvalidCvv,
}

/// Checks payment requests against the gateway's structural and business rules.
#[derive(Debug, Clone)]
pub struct PaymentValidator {
    allowed_currencies: HashSet<String>,
}

impl Default for PaymentValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl PaymentValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            allowed_currencies: config.allowed_currencies.iter().cloned().collect(),
        }
    }

    /// Validates against today's UTC date.
    pub fn validate(&self, request: &PaymentRequest) -> Result<(), ValidationError> {
        self.validate_at(request, Utc::now().date_naive())
    }

    /// Validates as if `today` were the current date. Rules are checked in a fixed order and the
    /// first failure wins.
    pub fn validate_at(&self, request: &PaymentRequest, today: NaiveDate) -> Result<(), ValidationError> {
        let card_number = request.card_number.reveal();
        if !CARD_NUMBER_LENGTH.contains(&card_number.len()) {
            return Err(ValidationError::CardNumberLength(card_number.len()));
        }
        if !is_numeric(card_number) {
            return Err(ValidationError::CardNumberNotNumeric);
        }

        if !(1..=12).contains(&request.expiry_month) {
            return Err(ValidationError::ExpiryMonth(request.expiry_month));
        }

        // Cards are valid through the end of their expiry month.
        let current = (today.year(), today.month() as i32);
        if (request.expiry_year, request.expiry_month) < current {
            return Err(ValidationError::CardExpired {
                month: request.expiry_month,
                year: request.expiry_year,
            });
        }

        if !self.allowed_currencies.contains(&request.currency) {
            return Err(ValidationError::UnsupportedCurrency(request.currency.clone()));
        }

        if request.amount <= 0 {
            return Err(ValidationError::NonPositiveAmount(request.amount));
        }

        let cvv = request.cvv.reveal();
        if !CVV_LENGTH.contains(&cvv.len()) || !is_numeric(cvv) {
            return Err(ValidationError::InvalidCvv);
        }

        Ok(())
    }
}

fn is_numeric(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::secret::Secret;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn valid_request() -> PaymentRequest {
        PaymentRequest {
            card_number: Secret::from("4111111111111111"),
            expiry_month: 12,
            expiry_year: 2026,
            currency: "GBP".to_string(),
            amount: 1000,
            cvv: Secret::from("123"),
        }
    }

    fn check(request: &PaymentRequest) -> Result<(), ValidationError> {
        PaymentValidator::default().validate_at(request, today())
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(check(&valid_request()), Ok(()));
    }

    #[test]
    fn test_card_number_length_bounds() {
        for (card, ok) in [
            ("4111111111111", false),
            ("41111111111111", true),
            ("4111111111111111111", true),
            ("41111111111111111111", false),
        ] {
            let request = PaymentRequest {
                card_number: Secret::from(card),
                ..valid_request()
            };
            assert_eq!(check(&request).is_ok(), ok, "card of length {}", card.len());
        }
    }

    #[test]
    fn test_card_number_must_be_digits() {
        let request = PaymentRequest {
            card_number: Secret::from("4111-1111-1111-1111"),
            ..valid_request()
        };
        assert_eq!(check(&request), Err(ValidationError::CardNumberNotNumeric));
    }

    #[test]
    fn test_expiry_month_bounds() {
        for month in [0, 13, -1] {
            let request = PaymentRequest {
                expiry_month: month,
                expiry_year: 2030,
                ..valid_request()
            };
            assert_eq!(check(&request), Err(ValidationError::ExpiryMonth(month)));
        }
    }

    #[test]
    fn test_card_valid_through_current_month() {
        let request = PaymentRequest {
            expiry_month: 10,
            expiry_year: 2026,
            ..valid_request()
        };
        assert_eq!(check(&request), Ok(()));
    }

    #[test]
    fn test_expired_cards_are_rejected() {
        for (month, year) in [(9, 2026), (12, 2025)] {
            let request = PaymentRequest {
                expiry_month: month,
                expiry_year: year,
                ..valid_request()
            };
            assert_eq!(
                check(&request),
                Err(ValidationError::CardExpired { month, year })
            );
        }
    }

    #[test]
    fn test_unsupported_currency() {
        for currency in ["JPY", "gbp", ""] {
            let request = PaymentRequest {
                currency: currency.to_string(),
                ..valid_request()
            };
            assert_eq!(
                check(&request),
                Err(ValidationError::UnsupportedCurrency(currency.to_string()))
            );
        }
    }

    #[test]
    fn test_configured_currency_is_accepted() {
        let validator = PaymentValidator::new(&ValidationConfig::from_list("JPY").unwrap());
        let request = PaymentRequest {
            currency: "JPY".to_string(),
            ..valid_request()
        };
        assert_eq!(validator.validate_at(&request, today()), Ok(()));
        assert!(validator.validate_at(&valid_request(), today()).is_err());
    }

    #[test]
    fn test_amount_must_be_positive() {
        for amount in [0, -1] {
            let request = PaymentRequest {
                amount,
                ..valid_request()
            };
            assert_eq!(check(&request), Err(ValidationError::NonPositiveAmount(amount)));
        }
    }

    #[test]
    fn test_cvv_rules() {
        for (cvv, ok) in [("12", false), ("123", true), ("1234", true), ("12345", false), ("12a", false)] {
            let request = PaymentRequest {
                cvv: Secret::from(cvv),
                ..valid_request()
            };
            assert_eq!(check(&request).is_ok(), ok, "cvv {cvv}");
        }
    }

    #[test]
    fn test_first_failure_is_reported() {
        let request = PaymentRequest {
            card_number: Secret::from("123"),
            expiry_month: 13,
            currency: "XXX".to_string(),
            amount: 0,
            cvv: Secret::from("1"),
            ..valid_request()
        };
        assert_eq!(check(&request), Err(ValidationError::CardNumberLength(3)));
    }
}
