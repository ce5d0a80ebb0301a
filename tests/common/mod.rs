#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use payment_gateway::application::gateway::PaymentGateway;
use payment_gateway::application::validation::PaymentValidator;
use payment_gateway::domain::authorization::{
    AuthorizationError, AuthorizationOutcome, AuthorizationRequest, AuthorizationResponse,
};
use payment_gateway::domain::payment::PaymentRequest;
use payment_gateway::domain::ports::Authorizer;
use payment_gateway::domain::secret::Secret;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentLedger;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stand-in for the acquiring bank that counts every call it receives.
///
/// Mirrors the bank simulator: cards ending in an odd digit are authorized, even digits are
/// declined and a trailing zero answers 503. `failing` makes every call fail instead.
#[derive(Clone, Default)]
pub struct SimulatedBank {
    calls: Arc<AtomicUsize>,
    failure: Option<AuthorizationError>,
}

impl SimulatedBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: AuthorizationError) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some(failure),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authorizer for SimulatedBank {
    async fn authorize(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<AuthorizationResponse, AuthorizationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        let last_digit = request
            .card_number
            .reveal()
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(0);
        if last_digit == 0 {
            return Err(AuthorizationError::ServiceUnavailable { status: 503 });
        }
        let authorized = last_digit % 2 == 1;
        Ok(AuthorizationResponse {
            outcome: AuthorizationOutcome {
                authorized,
                authorization_code: if authorized {
                    "0bb07405-6d44-4b50-a14f-7ae0beff13ad".to_string()
                } else {
                    String::new()
                },
            },
            transport_status: 200,
        })
    }
}

/// Builds a gateway over a fresh ledger, returning a handle to the ledger for inspection.
pub fn gateway_with(bank: SimulatedBank) -> (PaymentGateway, InMemoryPaymentLedger) {
    let _ = env_logger::try_init();
    let ledger = InMemoryPaymentLedger::new();
    let gateway = PaymentGateway::new(
        Box::new(ledger.clone()),
        Box::new(bank),
        PaymentValidator::default(),
    );
    (gateway, ledger)
}

pub fn next_year() -> i32 {
    Utc::now().year() + 1
}

/// A request that passes validation, for the given card number.
pub fn valid_request(card_number: &str) -> PaymentRequest {
    PaymentRequest {
        card_number: Secret::from(card_number),
        expiry_month: 12,
        expiry_year: next_year(),
        currency: "GBP".to_string(),
        amount: 1000,
        cvv: Secret::from("123"),
    }
}
