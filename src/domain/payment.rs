use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The outcome of a payment attempt.
///
/// `Rejected` is only ever produced by validation, before the bank is
/// contacted. `Authorized` and `Declined` are only produced after a bank call
/// attempt, including one that failed at the transport level.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

impl PaymentStatus {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentStatus::Authorized => "Authorized",
            PaymentStatus::Declined => "Declined",
            PaymentStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A payment as submitted by the merchant.
///
/// Numeric fields are signed so that out-of-range input reaches the validator
/// instead of failing deserialization. Missing fields default to empty/zero,
/// which the validator rejects.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
#[serde(default)]
pub struct PaymentRequest {
    /// Full primary account number, digits only.
    pub card_number: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub cvv: i32,
}

/// A processed payment as retained by the gateway.
///
/// Only the last four digits of the card survive processing. Records are
/// immutable once created.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StoredPayment {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    /// Upper-cased ISO currency code.
    pub currency: String,
    pub amount: i64,
}

impl StoredPayment {
    /// Builds the record for `request`, discarding everything but the last
    /// four card digits.
    pub fn new(id: Uuid, request: &PaymentRequest, status: PaymentStatus) -> Self {
        Self {
            id,
            status,
            card_number_last_four: last_four(&request.card_number),
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency.to_uppercase(),
            amount: request.amount,
        }
    }
}

/// Returns the final four characters of a card number, or an empty string
/// when there are fewer than four.
pub fn last_four(card_number: &str) -> String {
    let count = card_number.chars().count();
    if count < 4 {
        return String::new();
    }
    card_number.chars().skip(count - 4).collect()
}
