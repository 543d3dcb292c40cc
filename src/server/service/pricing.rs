//! Pure pricing computations for carts and checkout.
//!
//! Everything here is a function of its arguments: no queries, no clock, no
//! configuration lookups. Amounts are integer cents throughout and every
//! division floors, so a given cart state always prices identically.

use crate::server::model::cart::CartTotals;

/// Default sales tax in basis points (1500 = 15%).
pub const DEFAULT_TAX_RATE_BASIS_POINTS: u16 = 1500;

const BASIS_POINT_DENOMINATOR: i64 = 10_000;

/// Effective unit price of a product after its percentage discount.
///
/// `floor(price × (100 − discount) / 100)` when a positive discount is set,
/// otherwise the base price unchanged.
pub fn discounted_price_cents(price_cents: i32, discount_percent: Option<i16>) -> i32 {
    match discount_percent {
        Some(discount) if discount > 0 => {
            ((price_cents as i64 * (100 - discount as i64)) / 100) as i32
        }
        _ => price_cents,
    }
}

/// Total for one cart line, using the line's snapshotted unit price.
pub fn line_total_cents(item: &entity::cart_item::Model) -> i64 {
    item.quantity as i64 * item.unit_price_cents as i64
}

/// Tax owed on a subtotal: `floor(subtotal × rate)`.
pub fn tax_cents(subtotal_cents: i64, tax_rate_basis_points: u16) -> i64 {
    subtotal_cents * tax_rate_basis_points as i64 / BASIS_POINT_DENOMINATOR
}

/// Derives all cart totals in one pass over the lines.
///
/// The subtotal sums `quantity × unit_price_cents` over the snapshotted line
/// prices, so it can diverge from current catalog pricing when products were
/// repriced after being added. That divergence honors the price at add-time.
pub fn compute_totals<'a, I>(items: I, tax_rate_basis_points: u16) -> CartTotals
where
    I: IntoIterator<Item = &'a entity::cart_item::Model>,
{
    let mut total_items = 0i64;
    let mut subtotal_cents = 0i64;

    for item in items {
        total_items += item.quantity as i64;
        subtotal_cents += line_total_cents(item);
    }

    let tax_cents = tax_cents(subtotal_cents, tax_rate_basis_points);

    CartTotals {
        total_items,
        subtotal_cents,
        tax_cents,
        total_cents: subtotal_cents + tax_cents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn line(quantity: i32, unit_price_cents: i32) -> entity::cart_item::Model {
        entity::cart_item::Model {
            id: 0,
            cart_id: 0,
            product_id: 0,
            quantity,
            unit_price_cents,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn discount_floors_toward_zero() {
        assert_eq!(discounted_price_cents(1500, Some(20)), 1200);
        // 999 × 67 / 100 = 669.33, floored
        assert_eq!(discounted_price_cents(999, Some(33)), 669);
        assert_eq!(discounted_price_cents(1000, Some(100)), 0);
    }

    #[test]
    fn zero_or_absent_discount_passes_price_through() {
        assert_eq!(discounted_price_cents(1500, Some(0)), 1500);
        assert_eq!(discounted_price_cents(1500, None), 1500);
    }

    #[test]
    fn tax_floors_toward_zero() {
        assert_eq!(tax_cents(1000, 1500), 150);
        // 999 × 0.15 = 149.85, floored
        assert_eq!(tax_cents(999, 1500), 149);
        assert_eq!(tax_cents(1000, 0), 0);
    }

    #[test]
    fn totals_for_discounted_line() {
        let unit = discounted_price_cents(1500, Some(20));
        let items = [line(2, unit)];

        let totals = compute_totals(&items, DEFAULT_TAX_RATE_BASIS_POINTS);

        assert_eq!(totals.total_items, 2);
        assert_eq!(totals.subtotal_cents, 2400);
        assert_eq!(totals.tax_cents, 360);
        assert_eq!(totals.total_cents, 2760);
    }

    #[test]
    fn totals_sum_over_snapshotted_prices() {
        let items = [line(3, 750), line(1, 1999)];

        let totals = compute_totals(&items, DEFAULT_TAX_RATE_BASIS_POINTS);

        assert_eq!(totals.total_items, 4);
        assert_eq!(totals.subtotal_cents, 3 * 750 + 1999);
        assert_eq!(totals.tax_cents, totals.subtotal_cents * 1500 / 10_000);
        assert_eq!(totals.total_cents, totals.subtotal_cents + totals.tax_cents);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let totals = compute_totals(&[], DEFAULT_TAX_RATE_BASIS_POINTS);

        assert_eq!(totals.total_items, 0);
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.total_cents, 0);
    }
}
