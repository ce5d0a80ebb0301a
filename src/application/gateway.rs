use super::validation::{PaymentValidator, ValidationError};
use crate::domain::authorization::AuthorizationRequest;
use crate::domain::payment::{PaymentId, PaymentRecord, PaymentRequest, PaymentStatus};
use crate::domain::ports::{AuthorizerBox, PaymentLedgerBox};
use crate::error::Result;
use log::*;

/// How the transport layer should report the result of a gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeClass {
    /// Authorized or declined. The record's status tells them apart.
    Success,
    /// The request failed validation and was rejected.
    ClientError,
    /// The acquiring bank could not be reached or gave an unusable answer.
    UpstreamFailure,
    /// A lookup found nothing.
    NoContent,
}

/// Result of a completed payment pipeline run.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    pub record: PaymentRecord,
    pub class: OutcomeClass,
    /// Why the payment was rejected, if it was.
    pub rejection: Option<ValidationError>,
}

/// Drives a payment from request to stored outcome.
///
/// `PaymentGateway` owns the ledger and the bank adapter. It is `Send + Sync` and is meant to be
/// shared across request handlers.
pub struct PaymentGateway {
    ledger: PaymentLedgerBox,
    authorizer: AuthorizerBox,
    validator: PaymentValidator,
}

impl PaymentGateway {
    /// Creates a new `PaymentGateway`.
    ///
    /// # Arguments
    ///
    /// * `ledger` - Where processed payments are recorded.
    /// * `authorizer` - The acquiring bank adapter.
    /// * `validator` - The rules incoming requests are checked against.
    pub fn new(ledger: PaymentLedgerBox, authorizer: AuthorizerBox, validator: PaymentValidator) -> Self {
        Self {
            ledger,
            authorizer,
            validator,
        }
    }

    /// Validates, authorizes and records a payment.
    ///
    /// Invalid requests are recorded as `Rejected` without contacting the bank. A bank failure
    /// is returned as an error and nothing is recorded.
    pub async fn create_payment(&self, request: PaymentRequest) -> Result<PaymentOutcome> {
        if let Err(reason) = self.validator.validate(&request) {
            let record = PaymentRecord::from_request(PaymentId::generate(), PaymentStatus::Rejected, &request);
            info!(
                "Payment {} for card ending {} rejected: {reason}",
                record.id, record.card_number_last_four
            );
            self.ledger.store(record.clone()).await;
            return Ok(PaymentOutcome {
                record,
                class: OutcomeClass::ClientError,
                rejection: Some(reason),
            });
        }

        let response = self
            .authorizer
            .authorize(&AuthorizationRequest::from(&request))
            .await
            .inspect_err(|e| {
                warn!(
                    "Authorization for card ending {} failed, nothing recorded: {e}",
                    request.card_last_four()
                )
            })?;

        let status = if response.outcome.authorized {
            PaymentStatus::Authorized
        } else {
            PaymentStatus::Declined
        };
        let record = PaymentRecord::from_request(PaymentId::generate(), status, &request);
        info!(
            "Payment {} for card ending {} {:?} (bank status {})",
            record.id, record.card_number_last_four, status, response.transport_status
        );
        self.ledger.store(record.clone()).await;
        Ok(PaymentOutcome {
            record,
            class: OutcomeClass::Success,
            rejection: None,
        })
    }

    /// Fetches a previously processed payment.
    pub async fn get_payment(&self, id: &str) -> Option<PaymentRecord> {
        let record = self.ledger.lookup(id).await;
        if record.is_none() {
            debug!("Payment {id} not found");
        }
        record
    }
}
