//! actix-web transport for the gateway.
//!
//! Routes are thin: they parse the request, call the `PaymentGateway` and map its `OutcomeClass`
//! onto an HTTP status. All payment logic lives in the application layer.

pub mod errors;
pub mod routes;
pub mod server;
