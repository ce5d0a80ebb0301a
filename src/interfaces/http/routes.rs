//! Request handler definitions.
//!
//! Handlers must stay non-blocking: the only slow step, the bank call, is awaited inside
//! `PaymentGateway::create_payment`.

use super::errors::ServerError;
use crate::application::gateway::{OutcomeClass, PaymentGateway};
use crate::domain::payment::PaymentRequest;
use actix_web::{HttpResponse, Responder, get, http::StatusCode, post, web};
use log::*;
use serde_json::json;

/// HTTP status used to report each kind of outcome.
pub fn status_for(class: OutcomeClass) -> StatusCode {
    match class {
        OutcomeClass::Success => StatusCode::OK,
        OutcomeClass::ClientError => StatusCode::BAD_REQUEST,
        OutcomeClass::UpstreamFailure => StatusCode::BAD_GATEWAY,
        OutcomeClass::NoContent => StatusCode::NO_CONTENT,
    }
}

/// Registers every route. Expects `web::Data<PaymentGateway>` in the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::scope("/api")
            .service(create_payment)
            .service(get_payment),
    );
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[post("/payments")]
pub async fn create_payment(
    gateway: web::Data<PaymentGateway>,
    body: web::Bytes,
) -> Result<HttpResponse, ServerError> {
    // serde messages can quote the offending value, which may be card data
    let request = serde_json::from_slice::<PaymentRequest>(&body).map_err(|e| {
        debug!(
            "Could not parse payment request: {:?} error at line {} column {}",
            e.classify(),
            e.line(),
            e.column()
        );
        ServerError::InvalidRequestBody
    })?;
    let outcome = gateway.create_payment(request).await?;
    Ok(HttpResponse::build(status_for(outcome.class)).json(outcome.record))
}

#[get("/payments/{id}")]
pub async fn get_payment(gateway: web::Data<PaymentGateway>, id: web::Path<String>) -> HttpResponse {
    match gateway.get_payment(&id).await {
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::build(status_for(OutcomeClass::NoContent)).finish(),
    }
}
