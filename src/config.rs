use crate::error::{GatewayError, Result};
use std::time::Duration;

pub const DEFAULT_BANK_URL: &str = "http://localhost:8080";
pub const DEFAULT_BANK_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8090;

/// Everything the gateway needs at startup. Built once in `main` and handed to constructors.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    pub bank: BankConfig,
    pub validation: ValidationConfig,
    pub server: ServerConfig,
}

/// Where the acquiring bank lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct BankConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BANK_URL.to_string(),
            timeout: DEFAULT_BANK_TIMEOUT,
        }
    }
}

impl BankConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(GatewayError::Configuration(
                "bank URL must not be empty".to_string(),
            ));
        }
        if timeout.is_zero() {
            return Err(GatewayError::Configuration(
                "bank timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Self { base_url, timeout })
    }
}

/// Business rules the validator enforces that are not hard-coded.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// ISO 4217 codes accepted by the gateway. Matched exactly.
    pub allowed_currencies: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allowed_currencies: DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ValidationConfig {
    /// Parses a comma separated currency list such as `USD,EUR,GBP`.
    pub fn from_list(list: &str) -> Result<Self> {
        let allowed_currencies: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        if allowed_currencies.is_empty() {
            return Err(GatewayError::Configuration(
                "at least one currency must be allowed".to_string(),
            ));
        }
        Ok(Self { allowed_currencies })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
