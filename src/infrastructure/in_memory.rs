use crate::domain::payment::{PaymentId, PaymentRecord};
use crate::domain::ports::PaymentLedger;
use async_trait::async_trait;
use log::*;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory ledger of processed payments.
///
/// Uses `Arc<RwLock<HashMap<PaymentId, PaymentRecord>>>`: lookups share the lock, while each
/// insert holds it exclusively, so a reader never sees a partially stored record. Clones share
/// the same underlying map.
#[derive(Default, Clone)]
pub struct InMemoryPaymentLedger {
    payments: Arc<RwLock<HashMap<PaymentId, PaymentRecord>>>,
}

impl InMemoryPaymentLedger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payments.
    pub async fn len(&self) -> usize {
        self.payments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.payments.read().await.is_empty()
    }
}

#[async_trait]
impl PaymentLedger for InMemoryPaymentLedger {
    async fn store(&self, record: PaymentRecord) {
        let mut payments = self.payments.write().await;
        match payments.entry(record.id.clone()) {
            Entry::Vacant(entry) => {
                trace!("Stored payment {}", record.id);
                entry.insert(record);
            }
            // Records are immutable once stored.
            Entry::Occupied(_) => {
                warn!("Payment {} already recorded, keeping the original", record.id);
            }
        }
    }

    async fn lookup(&self, id: &str) -> Option<PaymentRecord> {
        let payments = self.payments.read().await;
        payments.get(id).cloned()
    }
}
