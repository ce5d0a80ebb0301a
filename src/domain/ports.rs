use super::authorization::{AuthorizationError, AuthorizationRequest, AuthorizationResponse};
use super::payment::PaymentRecord;
use async_trait::async_trait;

/// Append-only store of processed payments.
///
/// Implementations must tolerate any number of concurrent `store` and `lookup` calls, and a
/// `lookup` must observe every `store` that completed before it started.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    async fn store(&self, record: PaymentRecord);
    async fn lookup(&self, id: &str) -> Option<PaymentRecord>;
}

/// Asks the acquiring bank to authorize a card charge. One outbound call per invocation.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<AuthorizationResponse, AuthorizationError>;
}

pub type PaymentLedgerBox = Box<dyn PaymentLedger>;
pub type AuthorizerBox = Box<dyn Authorizer>;
