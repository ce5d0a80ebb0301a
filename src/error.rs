use crate::domain::authorization::AuthorizationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Acquiring bank failure: {0}")]
    Upstream(#[from] AuthorizationError),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
