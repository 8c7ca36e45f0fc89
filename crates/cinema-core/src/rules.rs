//! # Purchase Rules
//!
//! Ticket prices and the per-purchase ticket limit. The defaults are the
//! box office's standard terms; the application may override them from its
//! configuration file.

use crate::money::Money;
use crate::types::TicketType;
use crate::{ADULT_TICKET_PRICE, CHILD_TICKET_PRICE, INFANT_TICKET_PRICE, MAX_TICKETS_PER_PURCHASE};

// =============================================================================
// Ticket Prices
// =============================================================================

/// Unit price for each ticket type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketPrices {
    pub adult: Money,
    pub child: Money,
    pub infant: Money,
}

impl TicketPrices {
    /// Returns the unit price for a ticket type.
    #[inline]
    pub const fn price_of(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}

impl Default for TicketPrices {
    fn default() -> Self {
        TicketPrices {
            adult: Money::from_units(ADULT_TICKET_PRICE),
            child: Money::from_units(CHILD_TICKET_PRICE),
            infant: Money::from_units(INFANT_TICKET_PRICE),
        }
    }
}

// =============================================================================
// Purchase Rules
// =============================================================================

/// Everything the validator and calculator need besides the request itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRules {
    pub prices: TicketPrices,

    /// Largest aggregate quantity accepted in one purchase.
    pub max_tickets_per_purchase: i64,
}

impl Default for PurchaseRules {
    fn default() -> Self {
        PurchaseRules {
            prices: TicketPrices::default(),
            max_tickets_per_purchase: MAX_TICKETS_PER_PURCHASE,
        }
    }
}
