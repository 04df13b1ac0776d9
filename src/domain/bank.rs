use super::payment::{PaymentRequest, PaymentStatus};
use serde::{Deserialize, Serialize};

/// Body sent to the acquiring bank's `/payments` resource.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct BankAuthorizationRequest {
    pub card_number: String,
    /// `MM/YYYY`
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

/// Body returned by the bank.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct BankAuthorizationResult {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: Option<String>,
}

/// Derives the bank request from a validated payment request.
pub fn to_bank_request(request: &PaymentRequest) -> BankAuthorizationRequest {
    BankAuthorizationRequest {
        card_number: request.card_number.clone(),
        expiry_date: format!("{:02}/{:04}", request.expiry_month, request.expiry_year),
        currency: request.currency.clone(),
        amount: request.amount,
        cvv: request.cvv.to_string(),
    }
}

pub fn status_from_authorization(authorized: bool) -> PaymentStatus {
    if authorized {
        PaymentStatus::Authorized
    } else {
        PaymentStatus::Declined
    }
}
