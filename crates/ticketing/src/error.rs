//! Purchase error model.

use thiserror::Error;

/// Why a purchase was rejected.
///
/// All reasons surface as the single [`PurchaseError::InvalidPurchase`] kind;
/// the reason is diagnostic detail only.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchaseReason {
    #[error("no tickets requested (total: {total})")]
    NoTickets { total: i64 },

    #[error("too many tickets requested (total: {total}, max: {max})")]
    TooManyTickets { total: i64, max: i64 },

    #[error("at least one adult ticket is required")]
    NoAdult,

    #[error("each infant needs an adult (adults: {adults}, infants: {infants})")]
    InsufficientAdults { adults: i64, infants: i64 },

    /// A sum or price left the `i64` range. `i32` request counts only get
    /// there after roughly 2^32 requests.
    #[error("ticket counts are out of range")]
    Overflow,
}

/// Error returned by a ticket purchase.
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// The request broke a purchase rule. Nothing was charged or reserved.
    #[error("invalid purchase: {0}")]
    InvalidPurchase(InvalidPurchaseReason),

    /// The payment collaborator failed; its error is passed through as-is.
    #[error(transparent)]
    Payment(anyhow::Error),

    /// The seat reservation collaborator failed after payment was taken.
    #[error(transparent)]
    Reservation(anyhow::Error),
}

impl PurchaseError {
    pub fn is_invalid_purchase(&self) -> bool {
        matches!(self, PurchaseError::InvalidPurchase(_))
    }

    pub fn invalid_reason(&self) -> Option<InvalidPurchaseReason> {
        match self {
            PurchaseError::InvalidPurchase(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl From<InvalidPurchaseReason> for PurchaseError {
    fn from(reason: InvalidPurchaseReason) -> Self {
        PurchaseError::InvalidPurchase(reason)
    }
}
