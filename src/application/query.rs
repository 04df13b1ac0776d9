use crate::domain::payment::StoredPayment;
use crate::domain::ports::PaymentStoreRef;
use crate::error::{GatewayError, Result};
use uuid::Uuid;

/// Read-only access to recorded payments.
#[derive(Clone)]
pub struct PaymentQuery {
    store: PaymentStoreRef,
}

impl PaymentQuery {
    pub fn new(store: PaymentStoreRef) -> Self {
        Self { store }
    }

    /// Returns the payment recorded under `id`, or `GatewayError::NotFound`.
    pub async fn get_by_id(&self, id: Uuid) -> Result<StoredPayment> {
        tracing::debug!(%id, "Looking up payment");
        self.store.get(id).await?.ok_or(GatewayError::NotFound(id))
    }
}
