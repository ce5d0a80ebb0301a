use clap::Parser;
use log::info;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::gateway::PaymentGateway;
use payment_gateway::application::validation::PaymentValidator;
use payment_gateway::config::{
    BankConfig, DEFAULT_BANK_URL, DEFAULT_HOST, DEFAULT_PORT, GatewayConfig, ServerConfig,
    ValidationConfig,
};
use payment_gateway::infrastructure::bank::BankClient;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentLedger;
use payment_gateway::interfaces::http::server::run_server;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Card payment gateway", long_about = None)]
struct Cli {
    /// Base URL of the acquiring bank [default: BANK_SIMULATOR_URL, then http://localhost:8080]
    #[arg(long, env = "PG_BANK_URL")]
    bank_url: Option<String>,

    /// Milliseconds to wait for the acquiring bank before giving up
    #[arg(long, env = "PG_BANK_TIMEOUT_MS", default_value_t = 5000)]
    bank_timeout_ms: u64,

    /// Comma separated list of accepted currency codes
    #[arg(long, env = "PG_ALLOWED_CURRENCIES", default_value = "USD,EUR,GBP")]
    currencies: String,

    /// Address to listen on
    #[arg(long, env = "PG_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PG_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

impl Cli {
    fn into_config(self) -> payment_gateway::error::Result<GatewayConfig> {
        // Older deployments configure the bank through BANK_SIMULATOR_URL
        let bank_url = self
            .bank_url
            .or_else(|| std::env::var("BANK_SIMULATOR_URL").ok())
            .unwrap_or_else(|| DEFAULT_BANK_URL.to_string());
        Ok(GatewayConfig {
            bank: BankConfig::new(bank_url, Duration::from_millis(self.bank_timeout_ms))?,
            validation: ValidationConfig::from_list(&self.currencies)?,
            server: ServerConfig {
                host: self.host,
                port: self.port,
            },
        })
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let config = Cli::parse().into_config().into_diagnostic()?;

    info!(
        "Using acquiring bank at {} (timeout {:?}), currencies {:?}",
        config.bank.base_url, config.bank.timeout, config.validation.allowed_currencies
    );
    let bank = BankClient::new(config.bank).into_diagnostic()?;
    let gateway = PaymentGateway::new(
        Box::new(InMemoryPaymentLedger::new()),
        Box::new(bank),
        PaymentValidator::new(&config.validation),
    );

    run_server(config.server, gateway).await.into_diagnostic()?;
    info!("Bye!");
    Ok(())
}
