#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use payment_gateway::domain::payment::PaymentRequest;
use payment_gateway::infrastructure::bank_http::HttpBankClient;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::interfaces::http::{AppState, router};
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub fn valid_request() -> PaymentRequest {
    PaymentRequest {
        card_number: "4111111111111111".to_string(),
        expiry_month: 12,
        expiry_year: 2029,
        currency: "USD".to_string(),
        amount: 1050,
        cvv: 123,
    }
}

pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "card_number": "4111111111111111",
        "expiry_month": 12,
        "expiry_year": 2029,
        "currency": "USD",
        "amount": 1050,
        "cvv": 123
    })
}

pub fn bank_client(bank: &MockServer) -> HttpBankClient {
    HttpBankClient::new(&bank.uri(), Duration::from_secs(2)).unwrap()
}

/// Router wired to a wiremock bank and a fresh in-memory store.
pub fn test_app(bank: &MockServer) -> (axum::Router, InMemoryPaymentStore) {
    let store = InMemoryPaymentStore::new();
    let state = AppState::new(Arc::new(bank_client(bank)), Arc::new(store.clone()));
    (router(state), store)
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
