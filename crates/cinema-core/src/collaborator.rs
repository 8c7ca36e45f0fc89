//! # Collaborators
//!
//! The two third-party services a purchase is handed to once it has been
//! validated and priced. Their implementations live outside this crate.
//!
//! ```text
//! TicketService
//!      │
//!      ├── 1. TicketPaymentService::make_payment(account_id, amount)
//!      │
//!      └── 2. SeatReservationService::reserve_seat(account_id, seats)
//! ```
//!
//! Errors are opaque to the core: whatever a collaborator returns is handed
//! back to the caller as-is.

use std::sync::Arc;

use crate::error::CollaboratorError;
use crate::money::Money;

/// Takes payment for a purchase.
pub trait TicketPaymentService {
    /// Charges `amount` to `account_id`.
    fn make_payment(&self, account_id: i64, amount: Money) -> Result<(), CollaboratorError>;
}

/// Reserves seats for a purchase.
pub trait SeatReservationService {
    /// Reserves `seats` seats for `account_id`.
    fn reserve_seat(&self, account_id: i64, seats: i64) -> Result<(), CollaboratorError>;
}

// =============================================================================
// Forwarding Implementations
// =============================================================================
// Lets one collaborator be shared between services, or between a service
// and a test that inspects it afterwards.

macro_rules! forward_collaborator {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: TicketPaymentService + ?Sized> TicketPaymentService for $ptr {
                fn make_payment(&self, account_id: i64, amount: Money) -> Result<(), CollaboratorError> {
                    (**self).make_payment(account_id, amount)
                }
            }

            impl<T: SeatReservationService + ?Sized> SeatReservationService for $ptr {
                fn reserve_seat(&self, account_id: i64, seats: i64) -> Result<(), CollaboratorError> {
                    (**self).reserve_seat(account_id, seats)
                }
            }
        )*
    };
}

forward_collaborator!(&T, Box<T>, Arc<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::TicketService;
    use crate::types::{TicketType, TicketTypeRequest};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;

    #[derive(Default)]
    struct SharedCounter {
        payments: AtomicU32,
        reservations: AtomicU32,
    }

    impl TicketPaymentService for SharedCounter {
        fn make_payment(&self, _account_id: i64, _amount: Money) -> Result<(), CollaboratorError> {
            self.payments.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    impl SeatReservationService for SharedCounter {
        fn reserve_seat(&self, _account_id: i64, _seats: i64) -> Result<(), CollaboratorError> {
            self.reservations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Declined;

    impl TicketPaymentService for Declined {
        fn make_payment(&self, _account_id: i64, _amount: Money) -> Result<(), CollaboratorError> {
            Err("card declined".into())
        }
    }

    #[test]
    fn test_service_over_arc_across_threads() {
        let counter = Arc::new(SharedCounter::default());
        let service = Arc::new(TicketService::new(counter.clone(), counter.clone()));

        let handles: Vec<_> = (1..=4)
            .map(|account_id| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    service
                        .purchase_tickets(account_id, &[TicketTypeRequest::new(TicketType::Adult, 1)])
                        .map(|result| result.total_seats)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 1);
        }
        assert_eq!(counter.payments.load(Ordering::SeqCst), 4);
        assert_eq!(counter.reservations.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_service_over_boxed_trait_objects() {
        let payment: Box<dyn TicketPaymentService> = Box::new(Declined);
        let reservation: Box<dyn SeatReservationService> = Box::new(SharedCounter::default());
        let service = TicketService::new(payment, reservation);

        let err = service
            .purchase_tickets(1, &[TicketTypeRequest::new(TicketType::Adult, 1)])
            .unwrap_err();
        assert_eq!(err.to_string(), "card declined");
    }
}
