//! Application layer containing the payment pipeline.
//!
//! This module defines the `PaymentGateway`, which validates incoming card payments, asks the
//! acquiring bank for a decision and records the outcome in the ledger.

pub mod gateway;
pub mod validation;
