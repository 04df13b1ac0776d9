use super::payment::{PaymentRequest, PaymentStatus, StoredPayment};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Keyed storage for processed payments.
///
/// The id is a unique key: `add` must refuse an id that is already present.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn add(&self, payment: StoredPayment) -> Result<()>;
    async fn get(&self, id: Uuid) -> Result<Option<StoredPayment>>;
}

/// The single outbound authorization call.
///
/// Implementations never fail: anything short of a well-formed bank answer is
/// reported as `Declined`.
#[async_trait]
pub trait BankClient: Send + Sync {
    async fn authorize(&self, request: &PaymentRequest) -> PaymentStatus;
}

pub type PaymentStoreRef = Arc<dyn PaymentStore>;
pub type BankClientRef = Arc<dyn BankClient>;
