//! # Error Types
//!
//! Error types for ticket purchasing.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  PurchaseError                                                          │
//! │  ├── Invalid(InvalidPurchase)  - request rejected, nothing was called  │
//! │  ├── Payment(..)               - payment gateway failed                │
//! │  └── Reservation(..)           - seat reservation failed               │
//! │                                                                         │
//! │  InvalidPurchase                                                        │
//! │  ├── InvalidAccount                                                     │
//! │  ├── NoRequestsProvided                                                 │
//! │  ├── NoTicketsRequested                                                 │
//! │  ├── TooManyTickets                                                     │
//! │  ├── AdultRequiredForChildOrInfant                                      │
//! │  ├── AmountOutOfRange                                                   │
//! │  └── UnknownTicketType                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Rejections are enum variants, never String
//! 2. Collaborator failures are carried through untouched (`transparent`)
//! 3. No variant is retryable: the caller fixes the request and resubmits

use thiserror::Error;

// =============================================================================
// Invalid Purchase
// =============================================================================

/// Reasons a purchase request is rejected before any collaborator is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    /// Account ID is absent, zero or negative.
    #[error("Invalid account ID")]
    InvalidAccount,

    /// The request list is absent or empty.
    #[error("No ticket requests provided")]
    NoRequestsProvided,

    /// The aggregate quantity is zero or negative.
    #[error("No tickets requested")]
    NoTicketsRequested,

    /// The aggregate quantity exceeds the per-purchase limit.
    #[error("Maximum of {max} tickets can be purchased at a time")]
    TooManyTickets { requested: i64, max: i64 },

    /// Child or infant tickets requested without any adult entry.
    #[error("Child and Infant tickets cannot be purchased without an Adult ticket")]
    AdultRequiredForChildOrInfant,

    /// The total amount does not fit in `Money` at the configured prices.
    #[error("Purchase total is out of range")]
    AmountOutOfRange,

    /// Text that does not name a ticket type.
    ///
    /// ## When This Occurs
    /// Only at the parsing boundary (JSON request files, CLI arguments).
    /// Once a [`TicketType`](crate::TicketType) exists, pricing matches it
    /// exhaustively and this cannot happen.
    #[error("Unknown ticket type: {0}")]
    UnknownTicketType(String),
}

// =============================================================================
// Purchase Error
// =============================================================================

/// Opaque failure raised by a payment or seat reservation collaborator.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything `TicketService::purchase_tickets` can fail with.
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// The request broke a purchase rule.
    #[error(transparent)]
    Invalid(#[from] InvalidPurchase),

    /// The payment collaborator failed. Seats were not reserved.
    #[error(transparent)]
    Payment(CollaboratorError),

    /// The seat reservation collaborator failed after payment was taken.
    #[error(transparent)]
    Reservation(CollaboratorError),
}

impl PurchaseError {
    /// Returns the rejection reason if the request itself was invalid.
    pub fn as_invalid(&self) -> Option<&InvalidPurchase> {
        match self {
            PurchaseError::Invalid(reason) => Some(reason),
            _ => None,
        }
    }

    /// Returns true if no collaborator was called.
    pub fn is_rejection(&self) -> bool {
        matches!(self, PurchaseError::Invalid(_))
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PurchaseError.
pub type PurchaseResult<T> = Result<T, PurchaseError>;

// =============================================================================
// Unit Tests
// =============================================================================
