//! # Ticket Service
//!
//! The single entry point for buying tickets.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    TicketService::purchase_tickets                      │
//! │                                                                         │
//! │  invoked                                                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  validate_purchase ──── fails ───► rejected (no collaborator called)   │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  price_purchase ─────── overflow ─► rejected (AmountOutOfRange)        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  PricingResult { total_amount, total_seats }                            │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  make_payment(account_id, total_amount) ── fails ──► Payment error     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  reserve_seat(account_id, total_seats) ─── fails ──► Reservation error │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  succeeded → Ok(PricingResult)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each collaborator is called at most once per purchase. Nothing is retried
//! or rolled back. Repeating a call charges and reserves again.

use tracing::{debug, info, warn};

use crate::collaborator::{SeatReservationService, TicketPaymentService};
use crate::error::{PurchaseError, PurchaseResult};
use crate::pricing::price_purchase;
use crate::rules::PurchaseRules;
use crate::types::{PricingResult, PurchaseRequest, TicketTypeRequest};
use crate::validation::validate_purchase;

/// Validates, prices and delegates ticket purchases.
///
/// Holds no mutable state. It is `Send + Sync` whenever both collaborators
/// are.
#[derive(Debug, Clone)]
pub struct TicketService<P, R> {
    payment: P,
    reservation: R,
    rules: PurchaseRules,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a service with the standard purchase rules.
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_rules(payment, reservation, PurchaseRules::default())
    }

    /// Creates a service with custom prices or ticket limit.
    pub fn with_rules(payment: P, reservation: R, rules: PurchaseRules) -> Self {
        TicketService {
            payment,
            reservation,
            rules,
        }
    }

    /// Returns the rules this service applies.
    pub fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    /// Buys `requests` for `account_id`.
    ///
    /// On success the payment collaborator has been charged
    /// `total_amount`, then the reservation collaborator asked for
    /// `total_seats`, and those totals are returned.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PricingResult> {
        self.process(Some(account_id), Some(requests))
    }

    /// Buys tickets for a request whose fields may be missing.
    pub fn purchase(&self, request: &PurchaseRequest) -> PurchaseResult<PricingResult> {
        self.process(request.account_id, request.tickets.as_deref())
    }

    fn process(
        &self,
        account_id: Option<i64>,
        requests: Option<&[TicketTypeRequest]>,
    ) -> PurchaseResult<PricingResult> {
        let (account_id, requests, pricing) = validate_purchase(account_id, requests, &self.rules)
            .and_then(|(account_id, requests)| {
                let pricing = price_purchase(requests, &self.rules.prices)?;
                Ok((account_id, requests, pricing))
            })
            .map_err(|reason| {
                warn!(?account_id, %reason, "Ticket purchase rejected");
                reason
            })?;

        debug!(
            account_id,
            entries = requests.len(),
            amount = %pricing.total_amount,
            seats = pricing.total_seats,
            "Ticket purchase validated"
        );

        self.payment
            .make_payment(account_id, pricing.total_amount)
            .map_err(PurchaseError::Payment)?;

        self.reservation
            .reserve_seat(account_id, pricing.total_seats)
            .map_err(PurchaseError::Reservation)?;

        info!(
            account_id,
            amount = %pricing.total_amount,
            seats = pricing.total_seats,
            "Tickets purchased"
        );

        Ok(pricing)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
