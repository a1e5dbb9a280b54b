//! Place Order Use Case
//!
//! The purchase orchestrator: stock check → cost calculation → payment
//! authorization → stock debit, with compensating payment cancellation when
//! the debit fails after the charge was authorized.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::application::dto::{CheckoutRequest, PurchaseReceipt};
use crate::application::ports::{
    InventoryError, InventoryPort, LineQuantity, PaymentError, PaymentPort,
};
use crate::domain::pricing::{CostCalculator, PricingError};
use crate::domain::shared::{ProductId, TransactionId};

/// Errors from the purchase orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Input validation failed before any external call.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// One or more items cannot be fulfilled from stock.
    #[error("Items out of stock")]
    OutOfStock {
        /// The products that cannot be fulfilled.
        unavailable: Vec<ProductId>,
    },

    /// The payment gateway declined the charge.
    #[error("Payment was not authorized")]
    PaymentDeclined,

    /// Stock debit failed after authorization; the payment was compensated.
    #[error("Stock debit failed; payment {transaction_id} canceled")]
    StockDebitFailed {
        /// The canceled transaction.
        transaction_id: TransactionId,
    },

    /// The inventory service failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The payment gateway failed.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

/// Use case for finalizing a purchase.
pub struct PlaceOrderUseCase<I, P>
where
    I: InventoryPort,
    P: PaymentPort,
{
    inventory: Arc<I>,
    payment: Arc<P>,
    calculator: CostCalculator,
}

impl<I, P> PlaceOrderUseCase<I, P>
where
    I: InventoryPort,
    P: PaymentPort,
{
    /// Create a new PlaceOrderUseCase.
    pub fn new(inventory: Arc<I>, payment: Arc<P>, calculator: CostCalculator) -> Self {
        Self {
            inventory,
            payment,
            calculator,
        }
    }

    /// Execute the use case.
    ///
    /// Validation is fail-fast in the contract order (cart, region, tier) and
    /// happens before any external call.
    ///
    /// # Errors
    ///
    /// See [`CheckoutError`] for the failure taxonomy.
    pub async fn execute(
        &self,
        request: &CheckoutRequest,
    ) -> Result<PurchaseReceipt, CheckoutError> {
        // 1. Validate inputs: cart first, then region, then tier.
        if request.cart.is_empty() {
            return Err(PricingError::InvalidCart.into());
        }
        let region = request.parse_region()?;
        let tier = request.parse_tier()?;

        let items = LineQuantity::from_cart(&request.cart);

        // 2. Stock availability.
        let availability = self.inventory.check_availability(&items).await?;
        if !availability.available {
            return Err(CheckoutError::OutOfStock {
                unavailable: availability.unavailable,
            });
        }

        // 3. Price the order.
        let total = self.calculator.compute_total(&request.cart, region, tier)?;

        // 4. Authorize payment for the computed total.
        let authorization = self
            .payment
            .authorize(&request.customer_id, total)
            .await?;
        let Some(transaction_id) = authorization
            .authorized
            .then_some(authorization.transaction_id)
            .flatten()
        else {
            tracing::warn!(
                customer_id = %request.customer_id,
                %total,
                "payment declined"
            );
            return Err(CheckoutError::PaymentDeclined);
        };

        // 5. Debit stock; compensate the payment if the debit fails.
        let debited = self.inventory.debit_stock(&items).await?;
        if !debited {
            if let Err(e) = self
                .payment
                .cancel(&request.customer_id, &transaction_id)
                .await
            {
                tracing::error!(
                    transaction_id = %transaction_id,
                    error = %e,
                    "failed to cancel payment after stock debit failure"
                );
            }
            return Err(CheckoutError::StockDebitFailed { transaction_id });
        }

        tracing::info!(
            customer_id = %request.customer_id,
            transaction_id = %transaction_id,
            %total,
            "purchase finalized"
        );

        Ok(PurchaseReceipt {
            transaction_id,
            total,
            completed_at: Utc::now(),
            message: "Purchase completed successfully".to_string(),
        })
    }
}
