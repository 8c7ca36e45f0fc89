//! # cinema-core: Ticket Purchase Rules
//!
//! This crate decides whether a ticket purchase is allowed, what it costs and
//! how many seats it needs. Payment and seat reservation are NOT done here:
//! they are traits the caller injects.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cinema Tickets Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Caller (box office, web API, ...)                │   │
//! │  │          owns account/session context, builds the request       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ purchase_tickets(account, requests)    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cinema-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation│  │  pricing  │  │  service  │  │   │
//! │  │   │TicketType │  │  5 rules  │  │  amount   │  │ validate  │  │   │
//! │  │   │ Request   │  │ in order  │  │  seats    │  │ → delegate│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └─────┬─────┘  │   │
//! │  └──────────────────────────────────────────────────────┼────────┘   │
//! │                                  1. make_payment ───────┤            │
//! │                                  2. reserve_seat ───────┘            │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        TicketPaymentService  /  SeatReservationService          │   │
//! │  │                 (third-party, out of scope)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Ticket types, requests and pricing results
//! - [`money`] - Integer money in whole currency units
//! - [`error`] - Rejection reasons and the purchase error
//! - [`rules`] - Prices and the per-purchase ticket limit
//! - [`validation`] - The ordered purchase rules
//! - [`pricing`] - Amount and seat calculation
//! - [`collaborator`] - Payment and seat reservation traits
//! - [`service`] - The `TicketService` entry point
//!
//! ## Example Usage
//!
//! ```rust
//! use cinema_core::{
//!     CollaboratorError, Money, SeatReservationService, TicketPaymentService,
//!     TicketService, TicketType, TicketTypeRequest,
//! };
//!
//! struct Gateway;
//! impl TicketPaymentService for Gateway {
//!     fn make_payment(&self, _account_id: i64, _amount: Money) -> Result<(), CollaboratorError> {
//!         Ok(())
//!     }
//! }
//!
//! struct Seats;
//! impl SeatReservationService for Seats {
//!     fn reserve_seat(&self, _account_id: i64, _seats: i64) -> Result<(), CollaboratorError> {
//!         Ok(())
//!     }
//! }
//!
//! let service = TicketService::new(Gateway, Seats);
//! let result = service
//!     .purchase_tickets(1, &[
//!         TicketTypeRequest::new(TicketType::Adult, 2),
//!         TicketTypeRequest::new(TicketType::Child, 3),
//!         TicketTypeRequest::new(TicketType::Infant, 1),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(result.total_amount, Money::from_units(95));
//! assert_eq!(result.total_seats, 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collaborator;
pub mod error;
pub mod money;
pub mod pricing;
pub mod rules;
pub mod service;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use collaborator::{SeatReservationService, TicketPaymentService};
pub use error::{CollaboratorError, InvalidPurchase, PurchaseError, PurchaseResult};
pub use money::Money;
pub use rules::{PurchaseRules, TicketPrices};
pub use service::TicketService;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of tickets in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: i64 = 25;

/// Price of an adult ticket, in whole currency units.
pub const ADULT_TICKET_PRICE: i64 = 25;

/// Price of a child ticket, in whole currency units.
pub const CHILD_TICKET_PRICE: i64 = 15;

/// Infants sit on an adult's lap and travel free.
pub const INFANT_TICKET_PRICE: i64 = 0;
