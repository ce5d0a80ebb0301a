use super::secret::Secret;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Terminal status of a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

/// Opaque payment identifier, minted by the gateway and never supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    /// Mints a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PaymentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card payment as submitted by a merchant.
///
/// Numeric fields are signed and unchecked, and missing fields fall back to empty or zero
/// values: such requests are reported by the validator as a `Rejected` payment rather than
/// failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    pub card_number: Secret<String>,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub cvv: Secret<String>,
}

impl PaymentRequest {
    /// The last four characters of the card number, or all of it when shorter.
    pub fn card_last_four(&self) -> String {
        last_four(self.card_number.reveal())
    }

    /// Expiry formatted as `MM/YYYY`.
    pub fn expiry_date(&self) -> String {
        format!("{:02}/{}", self.expiry_month, self.expiry_year)
    }
}

pub fn last_four(card_number: &str) -> String {
    let count = card_number.chars().count();
    card_number.chars().skip(count.saturating_sub(4)).collect()
}

/// The stored and returned view of a processed payment. Holds no full card number or CVV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub payment_status: PaymentStatus,
    pub card_number_last_four: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

impl PaymentRecord {
    /// Builds a record from the caller's request, keeping its currency, amount and expiry verbatim.
    pub fn from_request(id: PaymentId, payment_status: PaymentStatus, request: &PaymentRequest) -> Self {
        Self {
            id,
            payment_status,
            card_number_last_four: request.card_last_four(),
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency.clone(),
            amount: request.amount,
        }
    }
}
