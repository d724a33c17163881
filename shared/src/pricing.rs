//! Order total calculation
//!
//! All money arithmetic is done in `Decimal` and converted back to `f64`
//! at the boundary, rounded half-up to 2 decimal places. Models carry
//! plain `f64` currency units for serialization; never sum those directly.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert a currency amount to `Decimal` for calculation
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert back to `f64` for storage/serialization, rounded half-up
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Fee constants applied on top of the item subtotal
///
/// The delivery fee comes from the restaurant, service fee and tax rate
/// from server configuration. The cart display passes `tax_rate = 0.0`;
/// checkout applies the configured rate (observed default 5%).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub delivery_fee: f64,
    pub service_fee: f64,
    /// Fraction of the subtotal, e.g. 0.05
    pub tax_rate: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            delivery_fee: 2.99,
            service_fee: 1.50,
            tax_rate: 0.0,
        }
    }
}

/// Computed order totals, all values rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub service_fee: f64,
    pub tax: f64,
    pub total: f64,
}

/// Compute totals for a sequence of cart lines
///
/// `subtotal = Σ price × quantity`, `tax = subtotal × tax_rate`,
/// `total = subtotal + delivery_fee + service_fee + tax`. Deterministic;
/// an empty cart is valid and yields fees only (checkout separately
/// rejects empty carts).
pub fn calculate_totals(lines: &[CartItem], fees: &FeeSchedule) -> OrderTotals {
    let subtotal: Decimal = lines
        .iter()
        .map(|line| to_decimal(line.item.price) * Decimal::from(line.quantity))
        .sum();

    let delivery_fee = to_decimal(fees.delivery_fee);
    let service_fee = to_decimal(fees.service_fee);
    let tax = subtotal * to_decimal(fees.tax_rate);
    let total = subtotal + delivery_fee + service_fee + tax;

    OrderTotals {
        subtotal: to_f64(subtotal),
        delivery_fee: to_f64(delivery_fee),
        service_fee: to_f64(service_fee),
        tax: to_f64(tax),
        total: to_f64(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn line(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            item: MenuItem {
                id: id.to_string(),
                restaurant_id: "r1".to_string(),
                name: format!("Item {id}"),
                description: String::new(),
                price,
                category: "Mains".to_string(),
                image: String::new(),
                is_veg: false,
                is_popular: false,
                is_spicy: false,
            },
            quantity,
        }
    }

    #[test]
    fn test_decimal_accumulation_precision() {
        // f64 would drift summing 0.01 a thousand times; Decimal must not
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_reference_example() {
        // (12.99 x 2) + (4.99 x 1), fees 2.99 + 1.50, no tax
        let lines = vec![line("1", 12.99, 2), line("2", 4.99, 1)];
        let fees = FeeSchedule {
            delivery_fee: 2.99,
            service_fee: 1.50,
            tax_rate: 0.0,
        };
        let totals = calculate_totals(&lines, &fees);
        assert_eq!(totals.subtotal, 30.97);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, 35.46);
    }

    #[test]
    fn test_checkout_tax_rate() {
        let lines = vec![line("1", 12.99, 2), line("2", 4.99, 1)];
        let fees = FeeSchedule {
            delivery_fee: 2.99,
            service_fee: 1.50,
            tax_rate: 0.05,
        };
        let totals = calculate_totals(&lines, &fees);
        assert_eq!(totals.subtotal, 30.97);
        // 30.97 * 0.05 = 1.5485 -> 1.55 half-up
        assert_eq!(totals.tax, 1.55);
        // Total is rounded from the unrounded sum: 30.97 + 2.99 + 1.50 + 1.5485
        assert_eq!(totals.total, 37.01);
    }

    #[test]
    fn test_empty_cart_is_fees_only() {
        let fees = FeeSchedule::default();
        let totals = calculate_totals(&[], &fees);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.total, 4.49);
    }
}
