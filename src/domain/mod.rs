//! Domain types and the ports the gateway talks through.

pub mod authorization;
pub mod payment;
pub mod ports;
pub mod secret;
