//! # Validation Module
//!
//! The purchase rules, checked in a fixed order. The first rule that fails
//! is the one reported.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate_purchase                                  │
//! │                                                                         │
//! │  1. validate_account_id      account present and > 0                   │
//! │           │                  else InvalidAccount                        │
//! │           ▼                                                             │
//! │  2. validate_request_list    list present and non-empty                │
//! │           │                  else NoRequestsProvided                    │
//! │           ▼                                                             │
//! │  3. validate_ticket_count    aggregate > 0     else NoTicketsRequested │
//! │           │                  aggregate <= max  else TooManyTickets     │
//! │           ▼                                                             │
//! │  4. validate_adult_presence  child/infant need an adult entry          │
//! │           │                  else AdultRequiredForChildOrInfant         │
//! │           ▼                                                             │
//! │          OK → pricing                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Aggregate-Only Quantity Check
//! Quantities are summed before they are checked. A negative entry lowers
//! the total instead of being rejected on its own, so
//! `[ADULT×10, CHILD×-3]` passes with an aggregate of 7.

use crate::error::InvalidPurchase;
use crate::rules::PurchaseRules;
use crate::types::TicketTypeRequest;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, InvalidPurchase>;

// =============================================================================
// Full Validation
// =============================================================================

/// Runs every purchase rule in order and returns the validated account ID
/// and ticket requests.
///
/// ## Example
/// ```rust
/// use cinema_core::validation::validate_purchase;
/// use cinema_core::{InvalidPurchase, PurchaseRules, TicketType, TicketTypeRequest};
///
/// let rules = PurchaseRules::default();
/// let adult = [TicketTypeRequest::new(TicketType::Adult, 1)];
///
/// assert!(validate_purchase(Some(1), Some(&adult[..]), &rules).is_ok());
/// assert_eq!(
///     validate_purchase(Some(0), Some(&adult[..]), &rules),
///     Err(InvalidPurchase::InvalidAccount)
/// );
/// ```
pub fn validate_purchase<'a>(
    account_id: Option<i64>,
    requests: Option<&'a [TicketTypeRequest]>,
    rules: &PurchaseRules,
) -> ValidationResult<(i64, &'a [TicketTypeRequest])> {
    let account_id = validate_account_id(account_id)?;
    let requests = validate_request_list(requests)?;
    validate_ticket_count(requests, rules.max_tickets_per_purchase)?;
    validate_adult_presence(requests)?;

    Ok((account_id, requests))
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Account IDs must be present and positive.
pub fn validate_account_id(account_id: Option<i64>) -> ValidationResult<i64> {
    match account_id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(InvalidPurchase::InvalidAccount),
    }
}

/// The request list must be present and hold at least one entry.
pub fn validate_request_list(
    requests: Option<&[TicketTypeRequest]>,
) -> ValidationResult<&[TicketTypeRequest]> {
    match requests {
        Some(requests) if !requests.is_empty() => Ok(requests),
        _ => Err(InvalidPurchase::NoRequestsProvided),
    }
}

/// The aggregate quantity must be in `1..=max`.
///
/// Returns the aggregate quantity.
pub fn validate_ticket_count(requests: &[TicketTypeRequest], max: i64) -> ValidationResult<i64> {
    let total = total_quantity(requests);

    if total <= 0 {
        return Err(InvalidPurchase::NoTicketsRequested);
    }

    if total > max {
        return Err(InvalidPurchase::TooManyTickets {
            requested: total,
            max,
        });
    }

    Ok(total)
}

/// Child and infant tickets need at least one adult entry in the same
/// purchase.
///
/// Presence is decided per entry. An `ADULT×0` entry still counts as an
/// adult entry here; the quantity rules are checked separately.
pub fn validate_adult_presence(requests: &[TicketTypeRequest]) -> ValidationResult<()> {
    let has_adult = requests.iter().any(|r| !r.ticket_type().requires_adult());
    let has_dependent = requests.iter().any(|r| r.ticket_type().requires_adult());

    if !has_adult && has_dependent {
        return Err(InvalidPurchase::AdultRequiredForChildOrInfant);
    }

    Ok(())
}

/// Sum of all requested quantities. Negative entries subtract.
pub fn total_quantity(requests: &[TicketTypeRequest]) -> i64 {
    requests.iter().map(|r| i64::from(r.quantity())).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketType::{Adult, Child, Infant};

    fn req(ticket_type: crate::TicketType, quantity: i32) -> TicketTypeRequest {
        TicketTypeRequest::new(ticket_type, quantity)
    }

    #[test]
    fn test_validate_account_id() {
        assert_eq!(validate_account_id(Some(1)), Ok(1));
        assert_eq!(validate_account_id(Some(i64::MAX)), Ok(i64::MAX));

        assert_eq!(validate_account_id(Some(0)), Err(InvalidPurchase::InvalidAccount));
        assert_eq!(validate_account_id(Some(-7)), Err(InvalidPurchase::InvalidAccount));
        assert_eq!(validate_account_id(None), Err(InvalidPurchase::InvalidAccount));
    }

    #[test]
    fn test_validate_request_list() {
        let one = [req(Adult, 1)];
        assert!(validate_request_list(Some(&one[..])).is_ok());

        assert_eq!(
            validate_request_list(Some(&[][..])),
            Err(InvalidPurchase::NoRequestsProvided)
        );
        assert_eq!(
            validate_request_list(None),
            Err(InvalidPurchase::NoRequestsProvided)
        );
    }

    #[test]
    fn test_validate_ticket_count() {
        assert_eq!(validate_ticket_count(&[req(Adult, 1)], 25), Ok(1));
        assert_eq!(validate_ticket_count(&[req(Adult, 20), req(Child, 5)], 25), Ok(25));

        assert_eq!(
            validate_ticket_count(&[req(Adult, 0)], 25),
            Err(InvalidPurchase::NoTicketsRequested)
        );
        assert_eq!(
            validate_ticket_count(&[req(Adult, -1)], 25),
            Err(InvalidPurchase::NoTicketsRequested)
        );
        assert_eq!(
            validate_ticket_count(&[req(Adult, 26)], 25),
            Err(InvalidPurchase::TooManyTickets {
                requested: 26,
                max: 25
            })
        );
    }

    #[test]
    fn test_negative_entry_only_lowers_the_aggregate() {
        // Not rejected on its own: only the sum is checked.
        assert_eq!(validate_ticket_count(&[req(Adult, 10), req(Child, -3)], 25), Ok(7));
        assert_eq!(validate_ticket_count(&[req(Adult, 30), req(Adult, -10)], 25), Ok(20));
    }

    #[test]
    fn test_validate_adult_presence() {
        assert!(validate_adult_presence(&[req(Adult, 1)]).is_ok());
        assert!(validate_adult_presence(&[req(Adult, 1), req(Child, 2), req(Infant, 1)]).is_ok());

        assert_eq!(
            validate_adult_presence(&[req(Child, 1)]),
            Err(InvalidPurchase::AdultRequiredForChildOrInfant)
        );
        assert_eq!(
            validate_adult_presence(&[req(Infant, 1)]),
            Err(InvalidPurchase::AdultRequiredForChildOrInfant)
        );
    }

    #[test]
    fn test_adult_entry_counts_regardless_of_quantity() {
        assert!(validate_adult_presence(&[req(Adult, 0), req(Child, 2)]).is_ok());
    }

    #[test]
    fn test_rules_checked_in_order() {
        let rules = PurchaseRules::default();

        // Bad account wins over everything else.
        assert_eq!(
            validate_purchase(Some(0), None, &rules),
            Err(InvalidPurchase::InvalidAccount)
        );

        // Quantity is checked before adult presence.
        let no_adult_too_many = [req(Child, 26)];
        assert_eq!(
            validate_purchase(Some(1), Some(&no_adult_too_many[..]), &rules),
            Err(InvalidPurchase::TooManyTickets {
                requested: 26,
                max: 25
            })
        );

        let no_adult_zero = [req(Infant, 0)];
        assert_eq!(
            validate_purchase(Some(1), Some(&no_adult_zero[..]), &rules),
            Err(InvalidPurchase::NoTicketsRequested)
        );
    }

    #[test]
    fn test_custom_limit() {
        let rules = PurchaseRules {
            max_tickets_per_purchase: 4,
            ..PurchaseRules::default()
        };
        let five = [req(Adult, 5)];
        assert_eq!(
            validate_purchase(Some(1), Some(&five[..]), &rules),
            Err(InvalidPurchase::TooManyTickets {
                requested: 5,
                max: 4
            })
        );
    }

    #[test]
    fn test_total_quantity() {
        assert_eq!(total_quantity(&[]), 0);
        assert_eq!(total_quantity(&[req(Adult, 2), req(Child, 3), req(Infant, 1)]), 6);
        assert_eq!(total_quantity(&[req(Adult, i32::MAX), req(Adult, i32::MAX)]), 2 * i32::MAX as i64);
    }
}
