//! # Pricing Module
//!
//! Turns validated ticket requests into the amount to charge and the number
//! of seats to reserve.
//!
//! ```text
//! [ADULT×2, CHILD×3, INFANT×1]
//!      │
//!      ├── amount = 25×2 + 15×3 + 0×1 = 95
//!      │
//!      └── seats  = 2 + 3             = 5   (infants have no seat)
//! ```
//!
//! These functions do not apply the purchase rules. Call them only with
//! requests that passed
//! [`validate_purchase`](crate::validation::validate_purchase). The amount is
//! computed with checked arithmetic; a total that does not fit is rejected as
//! `AmountOutOfRange`.

use crate::error::InvalidPurchase;
use crate::money::Money;
use crate::rules::TicketPrices;
use crate::types::{PricingResult, TicketTypeRequest};
use crate::validation::ValidationResult;

/// Computes both totals for a purchase.
pub fn price_purchase(
    requests: &[TicketTypeRequest],
    prices: &TicketPrices,
) -> ValidationResult<PricingResult> {
    let total_amount =
        calculate_total_amount(requests, prices).ok_or(InvalidPurchase::AmountOutOfRange)?;

    Ok(PricingResult {
        total_amount,
        total_seats: calculate_total_seats(requests),
    })
}

/// Sum of unit price × quantity over every entry.
///
/// Returns `None` if a line total or the running sum overflows.
pub fn calculate_total_amount(
    requests: &[TicketTypeRequest],
    prices: &TicketPrices,
) -> Option<Money> {
    requests.iter().try_fold(Money::zero(), |total, r| {
        let line = prices
            .price_of(r.ticket_type())
            .checked_multiply_quantity(i64::from(r.quantity()))?;
        total.checked_add(line)
    })
}

/// Sum of quantities over seat-bearing entries.
pub fn calculate_total_seats(requests: &[TicketTypeRequest]) -> i64 {
    requests
        .iter()
        .filter(|r| r.ticket_type().occupies_seat())
        .map(|r| i64::from(r.quantity()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketType::{Adult, Child, Infant};

    fn req(ticket_type: crate::TicketType, quantity: i32) -> TicketTypeRequest {
        TicketTypeRequest::new(ticket_type, quantity)
    }

    #[test]
    fn test_standard_prices() {
        let prices = TicketPrices::default();

        let cases = vec![
            (vec![req(Adult, 1)], 25, 1),
            (vec![req(Adult, 20), req(Child, 5)], 575, 25),
            (vec![req(Adult, 2), req(Child, 3), req(Infant, 1)], 95, 5),
            (vec![req(Adult, 10)], 250, 10),
        ];

        for (requests, amount, seats) in cases {
            let result = price_purchase(&requests, &prices).unwrap();
            assert_eq!(result.total_amount.units(), amount, "amount for {:?}", requests);
            assert_eq!(result.total_seats, seats, "seats for {:?}", requests);
        }
    }

    #[test]
    fn test_infants_are_free_and_seatless() {
        let prices = TicketPrices::default();
        let requests = [req(Adult, 1), req(Infant, 4)];

        assert_eq!(
            calculate_total_amount(&requests, &prices),
            Some(Money::from_units(25))
        );
        assert_eq!(calculate_total_seats(&requests), 1);
    }

    #[test]
    fn test_repeated_types_are_summed() {
        let prices = TicketPrices::default();
        let requests = [req(Adult, 1), req(Child, 1), req(Adult, 2)];

        assert_eq!(calculate_total_amount(&requests, &prices).unwrap().units(), 90);
        assert_eq!(calculate_total_seats(&requests), 4);
    }

    #[test]
    fn test_negative_entries_reduce_totals() {
        let prices = TicketPrices::default();
        let requests = [req(Adult, 10), req(Child, -3)];

        assert_eq!(calculate_total_amount(&requests, &prices).unwrap().units(), 205);
        assert_eq!(calculate_total_seats(&requests), 7);
    }

    #[test]
    fn test_custom_prices() {
        let prices = TicketPrices {
            adult: Money::from_units(12),
            child: Money::from_units(8),
            infant: Money::from_units(1),
        };
        let requests = [req(Adult, 2), req(Child, 1), req(Infant, 1)];

        assert_eq!(calculate_total_amount(&requests, &prices).unwrap().units(), 33);
        assert_eq!(calculate_total_seats(&requests), 3);
    }

    #[test]
    fn test_amount_overflow_is_rejected() {
        let prices = TicketPrices {
            adult: Money::from_units(i64::MAX),
            ..TicketPrices::default()
        };

        // A single line that overflows.
        let requests = [req(Adult, 2)];
        assert_eq!(calculate_total_amount(&requests, &prices), None);
        assert_eq!(
            price_purchase(&requests, &prices),
            Err(InvalidPurchase::AmountOutOfRange)
        );

        // Lines that fit on their own but not summed.
        let requests = [req(Adult, 1), req(Child, 1)];
        assert_eq!(calculate_total_amount(&requests, &prices), None);
    }

    #[test]
    fn test_largest_total_that_fits() {
        let prices = TicketPrices {
            adult: Money::from_units(i64::MAX),
            ..TicketPrices::default()
        };
        let requests = [req(Adult, 1), req(Infant, 3)];

        let result = price_purchase(&requests, &prices).unwrap();
        assert_eq!(result.total_amount, Money::from_units(i64::MAX));
        assert_eq!(result.total_seats, 1);
    }
}
