//! # Domain Types
//!
//! The request model for a ticket purchase and the totals it produces.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────┐   ┌─────────────────┐     │
//! │  │   TicketType    │   │ TicketTypeRequest │   │ PurchaseRequest │     │
//! │  │  ─────────────  │   │  ───────────────  │   │  ─────────────  │     │
//! │  │  Adult          │◄──│  ticket_type      │◄──│  account_id?    │     │
//! │  │  Child          │   │  quantity (i32)   │   │  tickets?       │     │
//! │  │  Infant         │   └───────────────────┘   └─────────────────┘     │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │                        ┌───────────────────┐                           │
//! │                        │   PricingResult   │                           │
//! │                        │  ───────────────  │                           │
//! │                        │  total_amount     │ → make_payment            │
//! │                        │  total_seats      │ → reserve_seat            │
//! │                        └───────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is persisted. Every value lives for one purchase call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidPurchase;
use crate::money::Money;

// =============================================================================
// Ticket Type
// =============================================================================

/// The kinds of ticket on sale.
///
/// Deserializes from text through [`FromStr`], so an unrecognised name in a
/// request file fails with [`InvalidPurchase::UnknownTicketType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Every ticket type, in display order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Returns true if a ticket of this type occupies a seat.
    ///
    /// Infants sit on an adult's lap.
    #[inline]
    pub const fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    /// Returns true if this ticket type needs an accompanying adult.
    #[inline]
    pub const fn requires_adult(&self) -> bool {
        matches!(self, TicketType::Child | TicketType::Infant)
    }

    /// Upper-case name, as used in request files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = InvalidPurchase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            _ => Err(InvalidPurchase::UnknownTicketType(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for TicketType {
    type Error = InvalidPurchase;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Ticket Type Request
// =============================================================================

/// A number of tickets of one type.
///
/// The quantity is taken as given. Zero and negative values are accepted
/// here; the purchase rules decide what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    quantity: i32,
}

impl TicketTypeRequest {
    /// Creates a request for `quantity` tickets of `ticket_type`.
    #[inline]
    pub const fn new(ticket_type: TicketType, quantity: i32) -> Self {
        TicketTypeRequest {
            ticket_type,
            quantity,
        }
    }

    #[inline]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    #[inline]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }
}

// =============================================================================
// Purchase Request
// =============================================================================

/// A complete purchase as submitted by a caller.
///
/// Both fields are optional so that a request with a missing account or a
/// missing ticket list can still be represented and rejected with the right
/// reason.
///
/// ## JSON Format
/// ```json
/// {
///   "accountId": 3,
///   "tickets": [
///     { "type": "ADULT", "quantity": 2 },
///     { "type": "CHILD", "quantity": 3 },
///     { "type": "INFANT", "quantity": 1 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[serde(default)]
    pub account_id: Option<i64>,

    #[serde(default)]
    pub tickets: Option<Vec<TicketTypeRequest>>,
}

impl PurchaseRequest {
    /// Creates a request with both fields present.
    pub fn new(account_id: i64, tickets: Vec<TicketTypeRequest>) -> Self {
        PurchaseRequest {
            account_id: Some(account_id),
            tickets: Some(tickets),
        }
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// What a valid purchase costs and how many seats it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Amount passed to the payment collaborator.
    pub total_amount: Money,

    /// Seat count passed to the reservation collaborator.
    pub total_seats: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
