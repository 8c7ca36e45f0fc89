//! # Stand-In Collaborators
//!
//! The payment gateway and seat reservation service are third-party systems.
//! Until the box office is connected to them, these stand-ins log each
//! request and report success.

use tracing::info;

use cinema_core::{CollaboratorError, Money, SeatReservationService, TicketPaymentService};

/// Logs payment requests instead of charging anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentGateway;

impl TicketPaymentService for LoggingPaymentGateway {
    fn make_payment(&self, account_id: i64, amount: Money) -> Result<(), CollaboratorError> {
        info!(account_id, amount = %amount, "Payment requested");
        Ok(())
    }
}

/// Logs seat reservations instead of holding any seats.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservation;

impl SeatReservationService for LoggingSeatReservation {
    fn reserve_seat(&self, account_id: i64, seats: i64) -> Result<(), CollaboratorError> {
        info!(account_id, seats, "Seat reservation requested");
        Ok(())
    }
}
