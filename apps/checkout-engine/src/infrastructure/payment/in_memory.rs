//! In-memory payment gateway adapter.
//!
//! Authorizes everything by default; can be switched to decline for tests.
//! Transaction IDs are fresh UUIDs, and every authorization is recorded so
//! tests can assert on cancellations.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{PaymentAuthorization, PaymentError, PaymentPort};
use crate::domain::shared::{CustomerId, Money, TransactionId};

/// Lifecycle state of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Charge authorized and standing.
    Authorized,
    /// Charge canceled (compensation).
    Canceled,
}

#[derive(Debug, Clone)]
struct TransactionRecord {
    customer_id: CustomerId,
    amount: Money,
    status: TransactionStatus,
}

/// In-memory payment gateway adapter.
#[derive(Debug, Default)]
pub struct InMemoryPaymentGateway {
    declining: AtomicBool,
    transactions: RwLock<HashMap<TransactionId, TransactionRecord>>,
}

impl InMemoryPaymentGateway {
    /// Create a gateway that authorizes every charge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the gateway between authorizing and declining.
    pub fn set_declining(&self, declining: bool) {
        self.declining.store(declining, Ordering::SeqCst);
    }

    /// Status of a recorded transaction, if any.
    #[must_use]
    pub fn status_of(&self, transaction_id: &TransactionId) -> Option<TransactionStatus> {
        self.transactions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(transaction_id)
            .map(|record| record.status)
    }

    /// Amount charged on a recorded transaction, if any.
    #[must_use]
    pub fn amount_of(&self, transaction_id: &TransactionId) -> Option<Money> {
        self.transactions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(transaction_id)
            .map(|record| record.amount)
    }
}

#[async_trait]
impl PaymentPort for InMemoryPaymentGateway {
    async fn authorize(
        &self,
        customer_id: &CustomerId,
        amount: Money,
    ) -> Result<PaymentAuthorization, PaymentError> {
        if self.declining.load(Ordering::SeqCst) {
            return Ok(PaymentAuthorization::declined());
        }

        let transaction_id = TransactionId::generate();
        self.transactions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                transaction_id.clone(),
                TransactionRecord {
                    customer_id: customer_id.clone(),
                    amount,
                    status: TransactionStatus::Authorized,
                },
            );

        Ok(PaymentAuthorization::approved(transaction_id))
    }

    async fn cancel(
        &self,
        customer_id: &CustomerId,
        transaction_id: &TransactionId,
    ) -> Result<(), PaymentError> {
        let mut transactions = self
            .transactions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        match transactions.get_mut(transaction_id) {
            Some(record) if record.customer_id == *customer_id => {
                record.status = TransactionStatus::Canceled;
                Ok(())
            }
            _ => Err(PaymentError::TransactionNotFound {
                transaction_id: transaction_id.to_string(),
            }),
        }
    }
}
