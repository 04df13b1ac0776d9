//! HTTP boundary for the gateway.
//!
//! Routes:
//! - POST /api/payments: validate, then authorize and record
//! - GET  /api/payments/{id}: fetch a recorded payment

pub mod error;
pub mod handlers;

use crate::application::processor::PaymentProcessor;
use crate::application::query::PaymentQuery;
use crate::domain::ports::{BankClientRef, PaymentStoreRef};
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub processor: PaymentProcessor,
    pub query: PaymentQuery,
}

impl AppState {
    pub fn new(bank: BankClientRef, store: PaymentStoreRef) -> Self {
        Self {
            processor: PaymentProcessor::new(bank, store.clone()),
            query: PaymentQuery::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/payments", post(handlers::create_payment))
        .route("/api/payments/{id}", get(handlers::get_payment))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
