//! Ticket purchase service.

use tracing::{info, instrument, warn};

use cinema_core::AccountId;

use crate::error::PurchaseError;
use crate::order::{PurchaseOrder, TicketsPurchased};
use crate::ports::{PaymentCapability, ReservationCapability};
use crate::ticket::TicketRequest;

/// Entry point for buying cinema tickets.
pub trait TicketService {
    /// Validate and pay for the requested tickets, then reserve their seats.
    ///
    /// # Errors
    ///
    /// [`PurchaseError::InvalidPurchase`] when a purchase rule is broken; in
    /// that case no collaborator is called. Collaborator failures are returned
    /// as [`PurchaseError::Payment`] or [`PurchaseError::Reservation`].
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseError>;
}

/// Validates purchases and drives the payment and reservation collaborators.
///
/// Holds no state between calls: every purchase builds its own
/// [`PurchaseOrder`].
#[derive(Debug, Clone)]
pub struct PurchaseValidator<P, R> {
    payments: P,
    reservations: R,
}

impl<P, R> PurchaseValidator<P, R>
where
    P: PaymentCapability,
    R: ReservationCapability,
{
    pub fn new(payments: P, reservations: R) -> Self {
        Self {
            payments,
            reservations,
        }
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn reservations(&self) -> &R {
        &self.reservations
    }

    /// Run one purchase: aggregate, validate, price, then charge and reserve.
    ///
    /// Payment is taken before seats are reserved. A reservation failure does
    /// not refund the payment.
    #[instrument(
        name = "purchase_tickets",
        skip(self, requests),
        fields(account_id = %account_id, requests = requests.len())
    )]
    pub fn process(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<TicketsPurchased, PurchaseError> {
        let outcome = PurchaseOrder::from_requests(requests)
            .and_then(|order| order.decide(account_id))
            .inspect_err(|e| info!(reason = %e, "purchase rejected"))?;

        self.payments
            .make_payment(account_id, outcome.total_price)
            .inspect_err(|e| warn!(error = %e, amount = outcome.total_price, "payment failed"))
            .map_err(PurchaseError::Payment)?;
        self.reservations
            .reserve_seats(account_id, outcome.total_seats)
            .inspect_err(|e| warn!(error = %e, seats = outcome.total_seats, "seat reservation failed"))
            .map_err(PurchaseError::Reservation)?;

        info!(
            tickets = outcome.total_tickets,
            price = outcome.total_price,
            seats = outcome.total_seats,
            "tickets purchased"
        );
        Ok(outcome)
    }
}

impl<P, R> TicketService for PurchaseValidator<P, R>
where
    P: PaymentCapability,
    R: ReservationCapability,
{
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<(), PurchaseError> {
        self.process(account_id, requests).map(|_| ())
    }
}
