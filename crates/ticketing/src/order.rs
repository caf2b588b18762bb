use serde::{Deserialize, Serialize};

use cinema_core::AccountId;

use crate::error::{InvalidPurchaseReason, PurchaseError};
use crate::ticket::{TicketCategory, TicketRequest};

/// Largest number of tickets a single purchase may contain.
pub const MAX_TICKETS_PER_PURCHASE: i64 = 20;

/// Per-category ticket counts for one purchase.
///
/// Built fresh for every purchase call and dropped when it returns. Requests
/// for the same category are summed; negative counts are summed verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PurchaseOrder {
    counts: [i64; TicketCategory::ALL.len()],
    total: i64,
}

/// Outcome of a purchase that passed every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketsPurchased {
    pub account_id: AccountId,
    pub total_tickets: i64,
    pub total_price: i64,
    pub total_seats: i64,
}

impl PurchaseOrder {
    /// Aggregate the requests per category.
    pub fn from_requests(requests: &[TicketRequest]) -> Result<Self, PurchaseError> {
        let mut order = Self::default();
        for request in requests {
            if request.count < 0 {
                tracing::warn!(
                    category = %request.category,
                    count = request.count,
                    "negative ticket count aggregated into purchase"
                );
            }

            let count = i64::from(request.count);
            let slot = &mut order.counts[request.category.index()];
            *slot = slot.checked_add(count).ok_or(InvalidPurchaseReason::Overflow)?;
            order.total = order
                .total
                .checked_add(count)
                .ok_or(InvalidPurchaseReason::Overflow)?;
        }
        Ok(order)
    }

    /// Summed count for one category (0 if never requested).
    pub fn count(&self, category: TicketCategory) -> i64 {
        self.counts[category.index()]
    }

    pub fn total_tickets(&self) -> i64 {
        self.total
    }

    /// Purchase rules, checked in order; the first violation wins.
    pub fn validate(&self) -> Result<(), PurchaseError> {
        let adults = self.count(TicketCategory::Adult);
        let infants = self.count(TicketCategory::Infant);

        if self.total <= 0 {
            return Err(InvalidPurchaseReason::NoTickets { total: self.total }.into());
        }
        if self.total > MAX_TICKETS_PER_PURCHASE {
            return Err(InvalidPurchaseReason::TooManyTickets {
                total: self.total,
                max: MAX_TICKETS_PER_PURCHASE,
            }
            .into());
        }
        if adults <= 0 {
            return Err(InvalidPurchaseReason::NoAdult.into());
        }
        if adults < infants {
            return Err(InvalidPurchaseReason::InsufficientAdults { adults, infants }.into());
        }
        Ok(())
    }

    /// Sum of unit price times count over every category.
    pub fn total_price(&self) -> Result<i64, PurchaseError> {
        TicketCategory::ALL.into_iter().try_fold(0i64, |acc, category| {
            category
                .unit_price()
                .checked_mul(self.count(category))
                .and_then(|line| acc.checked_add(line))
                .ok_or_else(|| PurchaseError::from(InvalidPurchaseReason::Overflow))
        })
    }

    /// Number of seats to reserve (every ticket except infants).
    pub fn total_seats(&self) -> Result<i64, PurchaseError> {
        TicketCategory::ALL
            .into_iter()
            .filter(|category| category.requires_seat())
            .try_fold(0i64, |acc, category| {
                acc.checked_add(self.count(category))
                    .ok_or_else(|| PurchaseError::from(InvalidPurchaseReason::Overflow))
            })
    }

    /// Validate, then compute the price and seat totals. Performs no IO.
    pub fn decide(&self, account_id: AccountId) -> Result<TicketsPurchased, PurchaseError> {
        self.validate()?;

        Ok(TicketsPurchased {
            account_id,
            total_tickets: self.total,
            total_price: self.total_price()?,
            total_seats: self.total_seats()?,
        })
    }
}
