use super::routes::status_for;
use crate::application::gateway::OutcomeClass;
use crate::error::GatewayError;
use actix_web::{
    HttpResponse,
    error::ResponseError,
    http::{StatusCode, header::ContentType},
};
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid request body")]
    InvalidRequestBody,
    #[error("{0}")]
    Upstream(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
}

impl From<GatewayError> for ServerError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::Upstream(e) => Self::Upstream(e.to_string()),
            other => {
                error!("Unexpected gateway error: {other}");
                Self::BackendError(other.to_string())
            }
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody => status_for(OutcomeClass::ClientError),
            Self::Upstream(_) => status_for(OutcomeClass::UpstreamFailure),
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}
