//! Cinema ticketing domain module.
//!
//! Validates ticket purchases, prices them and hands the results to the
//! payment and seat-reservation collaborators. Everything except the final
//! collaborator calls is deterministic domain logic (no IO, no storage).

pub mod error;
pub mod order;
pub mod ports;
pub mod service;
pub mod ticket;

pub use error::{InvalidPurchaseReason, PurchaseError};
pub use order::{MAX_TICKETS_PER_PURCHASE, PurchaseOrder, TicketsPurchased};
pub use ports::{PaymentCapability, ReservationCapability};
pub use service::{PurchaseValidator, TicketService};
pub use ticket::{TicketCategory, TicketRequest};
