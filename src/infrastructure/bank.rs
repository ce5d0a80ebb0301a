use crate::config::BankConfig;
use crate::domain::authorization::{
    AuthorizationError, AuthorizationOutcome, AuthorizationRequest, AuthorizationResponse,
};
use crate::domain::ports::Authorizer;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use log::*;
use reqwest::Client;

/// HTTP adapter for the acquiring bank's `/payments` endpoint.
///
/// Sends exactly one request per call, never retries, and gives up after the configured timeout.
#[derive(Clone)]
pub struct BankClient {
    config: BankConfig,
    client: Client,
}

impl BankClient {
    pub fn new(config: BankConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(format!("could not build bank client: {e}")))?;
        Ok(Self { config, client })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Authorizer for BankClient {
    async fn authorize(
        &self,
        request: &AuthorizationRequest,
    ) -> std::result::Result<AuthorizationResponse, AuthorizationError> {
        let url = self.url("/payments");
        debug!("Requesting authorization from {url}");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuthorizationError::Unreachable(format!(
                        "no answer within {:?}",
                        self.config.timeout
                    ))
                } else {
                    AuthorizationError::Unreachable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Bank answered with status {status}");
            return Err(AuthorizationError::ServiceUnavailable {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AuthorizationError::Unreachable(e.to_string()))?;
        let outcome = serde_json::from_slice::<AuthorizationOutcome>(&body)
            .map_err(|e| AuthorizationError::MalformedResponse(e.to_string()))?;
        trace!("Bank decision: authorized={}", outcome.authorized);
        Ok(AuthorizationResponse {
            outcome,
            transport_status: status.as_u16(),
        })
    }
}
