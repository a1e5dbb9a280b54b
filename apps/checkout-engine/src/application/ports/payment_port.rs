//! Payment Port (Driven Port)
//!
//! Interface for the external payment gateway: authorization against the
//! computed total, and cancellation for compensation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::shared::{CustomerId, Money, TransactionId};

/// Outcome of a payment authorization attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAuthorization {
    /// Whether the gateway authorized the charge.
    pub authorized: bool,
    /// Gateway transaction id; present only when authorized.
    pub transaction_id: Option<TransactionId>,
}

impl PaymentAuthorization {
    /// An authorized payment with its transaction id.
    #[must_use]
    pub const fn approved(transaction_id: TransactionId) -> Self {
        Self {
            authorized: true,
            transaction_id: Some(transaction_id),
        }
    }

    /// A declined payment.
    #[must_use]
    pub const fn declined() -> Self {
        Self {
            authorized: false,
            transaction_id: None,
        }
    }
}

/// Errors from the payment gateway itself (not business outcomes).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The gateway could not be reached or failed internally.
    #[error("Payment gateway unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Cancellation referenced a transaction the gateway does not know.
    #[error("Transaction not found: {transaction_id}")]
    TransactionNotFound {
        /// The missing transaction id.
        transaction_id: String,
    },
}

/// Port for the external payment gateway.
#[async_trait]
pub trait PaymentPort: Send + Sync {
    /// Authorize a charge against a customer for the given amount.
    async fn authorize(
        &self,
        customer_id: &CustomerId,
        amount: Money,
    ) -> Result<PaymentAuthorization, PaymentError>;

    /// Cancel a previously authorized transaction (compensation path).
    async fn cancel(
        &self,
        customer_id: &CustomerId,
        transaction_id: &TransactionId,
    ) -> Result<(), PaymentError>;
}
