use crate::domain::payment::StoredPayment;
use crate::domain::ports::PaymentStore;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe in-memory store for processed payments.
///
/// Uses `Arc<RwLock<HashMap<Uuid, StoredPayment>>>` so concurrent submissions
/// and lookups can share it. Unbounded unless built with
/// [`InMemoryPaymentStore::with_capacity_limit`].
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<Uuid, StoredPayment>>>,
    capacity_limit: Option<usize>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that refuses new records once `limit` are held.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            payments: Arc::default(),
            capacity_limit: Some(limit),
        }
    }

    pub async fn len(&self) -> usize {
        self.payments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.payments.read().await.is_empty()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn add(&self, payment: StoredPayment) -> Result<()> {
        let mut payments = self.payments.write().await;
        if let Some(capacity) = self.capacity_limit
            && payments.len() >= capacity
        {
            return Err(GatewayError::StoreFull { capacity });
        }
        match payments.entry(payment.id) {
            Entry::Occupied(_) => Err(GatewayError::DuplicateId(payment.id)),
            Entry::Vacant(slot) => {
                slot.insert(payment);
                Ok(())
            }
        }
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredPayment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(&id).cloned())
    }
}
