//! Application layer orchestrating the payment workflow.
//!
//! `PaymentProcessor` drives a validated request through the bank and into the
//! record store. `PaymentQuery` serves lookups by id. Both hold their
//! collaborators as shared trait objects so they can be cloned into
//! per-request tasks.

pub mod processor;
pub mod query;
