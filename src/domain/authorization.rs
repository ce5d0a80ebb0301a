use super::payment::PaymentRequest;
use super::secret::{Secret, serialize_revealed};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body sent to the acquiring bank. This is the only place the full card number and CVV leave
/// the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationRequest {
    #[serde(serialize_with = "serialize_revealed")]
    pub card_number: Secret<String>,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    #[serde(serialize_with = "serialize_revealed")]
    pub cvv: Secret<String>,
}

impl From<&PaymentRequest> for AuthorizationRequest {
    fn from(request: &PaymentRequest) -> Self {
        Self {
            card_number: request.card_number.clone(),
            expiry_date: request.expiry_date(),
            currency: request.currency.clone(),
            amount: request.amount,
            cvv: request.cvv.clone(),
        }
    }
}

/// The bank's decision, as parsed from a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorizationOutcome {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResponse {
    pub outcome: AuthorizationOutcome,
    /// HTTP status the bank answered with.
    pub transport_status: u16,
}

/// Failures to obtain a decision from the bank. None of these is a decline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("acquiring bank unreachable: {0}")]
    Unreachable(String),
    /// The bank answered with any non-success status. The body is not read.
    #[error("acquiring bank answered with status {status}")]
    ServiceUnavailable { status: u16 },
    #[error("malformed response from acquiring bank: {0}")]
    MalformedResponse(String),
}
