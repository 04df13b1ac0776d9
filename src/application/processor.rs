use crate::domain::payment::{PaymentRequest, StoredPayment, last_four};
use crate::domain::ports::{BankClientRef, PaymentStoreRef};
use crate::error::Result;
use uuid::Uuid;

/// Runs a validated payment through the bank and records the outcome.
///
/// Callers are expected to have run the validator first; `submit` does not
/// re-check its input.
#[derive(Clone)]
pub struct PaymentProcessor {
    bank: BankClientRef,
    store: PaymentStoreRef,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor`.
    ///
    /// # Arguments
    ///
    /// * `bank` - The acquiring bank adapter.
    /// * `store` - Where processed payments are recorded.
    pub fn new(bank: BankClientRef, store: PaymentStoreRef) -> Self {
        Self { bank, store }
    }

    /// Authorizes `request`, records the outcome under a fresh id and returns
    /// that id.
    ///
    /// A bank failure still produces a record (with status `Declined`). Only a
    /// storage failure is returned as an error.
    pub async fn submit(&self, request: &PaymentRequest) -> Result<Uuid> {
        tracing::info!(
            card_last_four = %last_four(&request.card_number),
            "Received payment request"
        );
        let status = self.bank.authorize(request).await;

        let id = Uuid::new_v4();
        let payment = StoredPayment::new(id, request, status);
        if let Err(e) = self.store.add(payment).await {
            tracing::error!(%id, error = %e, "Failed to record payment");
            return Err(e);
        }

        tracing::info!(%id, %status, "Processed payment");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentStatus;
    use crate::domain::ports::{BankClient, PaymentStore};
    use crate::error::GatewayError;
    use crate::infrastructure::in_memory::InMemoryPaymentStore;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedBank {
        status: PaymentStatus,
        calls: AtomicUsize,
    }

    impl FixedBank {
        fn new(status: PaymentStatus) -> Arc<Self> {
            Arc::new(Self {
                status,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl BankClient for FixedBank {
        async fn authorize(&self, _request: &PaymentRequest) -> PaymentStatus {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.status
        }
    }

    fn request() -> PaymentRequest {
        PaymentRequest {
            card_number: "4111111111111111".to_string(),
            expiry_month: 12,
            expiry_year: 2029,
            currency: "usd".to_string(),
            amount: 1050,
            cvv: 123,
        }
    }

    #[tokio::test]
    async fn test_submit_records_bank_outcome() {
        for status in [PaymentStatus::Authorized, PaymentStatus::Declined] {
            let bank = FixedBank::new(status);
            let store = InMemoryPaymentStore::new();
            let processor = PaymentProcessor::new(bank.clone(), Arc::new(store.clone()));

            let id = processor.submit(&request()).await.unwrap();

            let stored = store.get(id).await.unwrap().unwrap();
            assert_eq!(stored.status, status);
            assert_eq!(stored.card_number_last_four, "1111");
            assert_eq!(stored.currency, "USD");
            assert_eq!(bank.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_submit_issues_distinct_ids() {
        let store = InMemoryPaymentStore::new();
        let processor = PaymentProcessor::new(
            FixedBank::new(PaymentStatus::Authorized),
            Arc::new(store.clone()),
        );

        let first = processor.submit(&request()).await.unwrap();
        let second = processor.submit(&request()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let bank = FixedBank::new(PaymentStatus::Authorized);
        let processor = PaymentProcessor::new(
            bank.clone(),
            Arc::new(InMemoryPaymentStore::with_capacity_limit(0)),
        );

        let result = processor.submit(&request()).await;

        assert!(matches!(result, Err(GatewayError::StoreFull { capacity: 0 })));
        assert_eq!(bank.calls.load(Ordering::SeqCst), 1);
    }
}
