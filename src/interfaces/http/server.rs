use super::routes::configure;
use crate::application::gateway::PaymentGateway;
use crate::config::ServerConfig;
use crate::error::Result;
use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};
use log::info;

/// Runs the HTTP server until it is shut down.
pub async fn run_server(config: ServerConfig, gateway: PaymentGateway) -> Result<()> {
    let srv = create_server_instance(&config, gateway)?;
    info!("Listening on {}:{}", config.host, config.port);
    srv.await?;
    Ok(())
}

pub fn create_server_instance(config: &ServerConfig, gateway: PaymentGateway) -> Result<Server> {
    let gateway = web::Data::new(gateway);
    let srv = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %r").log_target("payment_gateway::access_log"))
            .app_data(gateway.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
