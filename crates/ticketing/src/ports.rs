//! Collaborator capabilities consumed by the purchase service.
//!
//! The concrete payment gateway and seat booking backends live outside this
//! crate. Both calls are synchronous; any failure is returned to the caller
//! untouched, with no retry or compensation here.

use std::sync::Arc;

use cinema_core::AccountId;

/// Charges an account.
pub trait PaymentCapability {
    fn make_payment(&self, account_id: AccountId, amount: i64) -> anyhow::Result<()>;
}

/// Reserves seats for an account.
pub trait ReservationCapability {
    fn reserve_seats(&self, account_id: AccountId, seats: i64) -> anyhow::Result<()>;
}

macro_rules! forward_capability {
    ($cap:ident, $method:ident, $arg:ident) => {
        impl<T: $cap + ?Sized> $cap for &T {
            fn $method(&self, account_id: AccountId, $arg: i64) -> anyhow::Result<()> {
                (**self).$method(account_id, $arg)
            }
        }

        impl<T: $cap + ?Sized> $cap for Box<T> {
            fn $method(&self, account_id: AccountId, $arg: i64) -> anyhow::Result<()> {
                (**self).$method(account_id, $arg)
            }
        }

        impl<T: $cap + ?Sized> $cap for Arc<T> {
            fn $method(&self, account_id: AccountId, $arg: i64) -> anyhow::Result<()> {
                (**self).$method(account_id, $arg)
            }
        }
    };
}

forward_capability!(PaymentCapability, make_payment, amount);
forward_capability!(ReservationCapability, reserve_seats, seats);
