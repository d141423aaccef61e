//! Pricing
//!
//! Pure order figures derived from a slice of line items. Everything is
//! computed at full `Decimal` precision; rounding happens only at the
//! display edge (`CartTotals::rounded`) and at the payment edge
//! (`amount_due_minor`).

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::cart::LineItem;

/// Errors converting a grand total into payment minor units.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The amount cannot be represented as integer minor units.
    #[error("amount {0} cannot be represented in minor units")]
    AmountOutOfRange(Decimal),
}

/// Sales tax applied to every order, as a fraction of the subtotal.
#[must_use]
pub fn tax_rate() -> Percentage {
    Percentage::from(0.10)
}

/// Subtotal above which shipping is free.
#[must_use]
pub fn free_shipping_threshold() -> Decimal {
    Decimal::new(50_00, 2)
}

/// Flat shipping fee charged at or below the free-shipping threshold.
#[must_use]
pub fn flat_shipping_fee() -> Decimal {
    Decimal::new(5_99, 2)
}

/// Sum of `unit_price × quantity` over the items.
#[must_use]
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().fold(Decimal::ZERO, |acc, item| {
        acc + item.unit_price * Decimal::from(item.quantity)
    })
}

/// Total saved against the original prices implied by each item's discount
/// percentage.
///
/// The catalog advertises a discount but only ships the discounted price, so
/// the original is reconstructed as `unit_price / (1 − discount/100)`. Items
/// without a discount, or with one outside the open interval (0, 100),
/// contribute nothing.
#[must_use]
pub fn savings(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc + item_savings(item))
}

/// Tax due on the subtotal.
#[must_use]
pub fn tax(items: &[LineItem]) -> Decimal {
    tax_rate() * subtotal(items)
}

/// Shipping fee for the order: zero above the free-shipping threshold,
/// otherwise the flat fee. An empty cart ships nothing and owes nothing.
#[must_use]
pub fn shipping_fee(items: &[LineItem]) -> Decimal {
    if items.is_empty() || subtotal(items) > free_shipping_threshold() {
        Decimal::ZERO
    } else {
        flat_shipping_fee()
    }
}

/// `subtotal + tax + shipping_fee`, at full precision.
#[must_use]
pub fn grand_total(items: &[LineItem]) -> Decimal {
    subtotal(items) + tax(items) + shipping_fee(items)
}

/// The grand total scaled to the currency's minor unit (for example cents),
/// rounded to the nearest integer minor unit with midpoints away from zero.
/// This is the figure handed to the payment collaborator; it is never
/// truncated.
///
/// # Errors
///
/// Returns a `PricingError::AmountOutOfRange` if the scaled amount overflows
/// the decimal range or does not fit an `i64`.
pub fn amount_due_minor(items: &[LineItem], currency: &Currency) -> Result<i64, PricingError> {
    let total = grand_total(items);
    let scale = Decimal::from(10u32.pow(currency.exponent));

    total
        .checked_mul(scale)
        .ok_or(PricingError::AmountOutOfRange(total))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::AmountOutOfRange(total))
}

/// All order figures for one cart state.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals {
    /// Sum of `unit_price × quantity`.
    pub subtotal: Decimal,

    /// Total saved against reconstructed original prices.
    pub savings: Decimal,

    /// Tax due on the subtotal.
    pub tax: Decimal,

    /// Shipping fee, zero above the free-shipping threshold.
    pub shipping_fee: Decimal,

    /// `subtotal + tax + shipping_fee`.
    pub grand_total: Decimal,
}

impl CartTotals {
    /// Derive every figure from the items, computing the subtotal once.
    #[must_use]
    pub fn of(items: &[LineItem]) -> Self {
        let subtotal = subtotal(items);

        let shipping_fee = if items.is_empty() || subtotal > free_shipping_threshold() {
            Decimal::ZERO
        } else {
            flat_shipping_fee()
        };

        let tax = tax_rate() * subtotal;

        CartTotals {
            subtotal,
            savings: savings(items),
            tax,
            shipping_fee,
            grand_total: subtotal + tax + shipping_fee,
        }
    }

    /// The same figures rounded to 2 fraction digits (midpoints away from
    /// zero) for display. Intermediate math stays at full precision; only
    /// this view rounds.
    #[must_use]
    pub fn rounded(&self) -> Self {
        CartTotals {
            subtotal: round_for_display(self.subtotal),
            savings: round_for_display(self.savings),
            tax: round_for_display(self.tax),
            shipping_fee: round_for_display(self.shipping_fee),
            grand_total: round_for_display(self.grand_total),
        }
    }
}

/// Round a monetary amount to 2 fraction digits, midpoints away from zero.
#[must_use]
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn item_savings(item: &LineItem) -> Decimal {
    let Some(discount) = item.discount_percentage else {
        return Decimal::ZERO;
    };

    if discount <= Decimal::ZERO || discount >= Decimal::ONE_HUNDRED {
        return Decimal::ZERO;
    }

    let original = item.unit_price / (Decimal::ONE - discount / Decimal::ONE_HUNDRED);

    (original - item.unit_price) * Decimal::from(item.quantity)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    fn line_item(id: u64, unit_price: Decimal, quantity: u32) -> LineItem {
        LineItem {
            id,
            title: format!("Product {id}"),
            thumbnail: String::new(),
            unit_price,
            quantity,
            total_price: unit_price * Decimal::from(quantity),
            discount_percentage: None,
            added_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn discounted_item(
        id: u64,
        unit_price: Decimal,
        quantity: u32,
        discount: Decimal,
    ) -> LineItem {
        let mut item = line_item(id, unit_price, quantity);
        item.discount_percentage = Some(discount);
        item
    }

    #[test]
    fn empty_cart_owes_nothing() {
        let items: [LineItem; 0] = [];

        assert_eq!(subtotal(&items), Decimal::ZERO);
        assert_eq!(tax(&items), Decimal::ZERO);
        assert_eq!(savings(&items), Decimal::ZERO);
        assert_eq!(shipping_fee(&items), Decimal::ZERO);
        assert_eq!(grand_total(&items), Decimal::ZERO);
    }

    #[test]
    fn order_above_free_shipping_threshold() {
        // 20.00 × 2 + 15.00 × 1 = 55.00, over the 50.00 threshold.
        let items = [
            line_item(1, Decimal::new(20_00, 2), 2),
            line_item(2, Decimal::new(15_00, 2), 1),
        ];

        assert_eq!(subtotal(&items), Decimal::new(55_00, 2));
        assert_eq!(tax(&items), Decimal::new(5_50, 2));
        assert_eq!(shipping_fee(&items), Decimal::ZERO);
        assert_eq!(grand_total(&items), Decimal::new(60_50, 2));
    }

    #[test]
    fn order_below_free_shipping_threshold_pays_flat_fee() {
        // 20.00 + 15.00 = 35.00, under the threshold.
        let items = [
            line_item(1, Decimal::new(20_00, 2), 1),
            line_item(2, Decimal::new(15_00, 2), 1),
        ];

        assert_eq!(subtotal(&items), Decimal::new(35_00, 2));
        assert_eq!(tax(&items), Decimal::new(3_50, 2));
        assert_eq!(shipping_fee(&items), Decimal::new(5_99, 2));
        assert_eq!(grand_total(&items), Decimal::new(44_49, 2));
    }

    #[test]
    fn subtotal_exactly_at_threshold_pays_flat_fee() {
        let items = [line_item(1, Decimal::new(25_00, 2), 2)];

        assert_eq!(subtotal(&items), Decimal::new(50_00, 2));
        assert_eq!(shipping_fee(&items), flat_shipping_fee());
        assert_eq!(grand_total(&items), Decimal::new(60_99, 2));
    }

    #[test]
    fn savings_reconstructs_original_price_from_discount() {
        // 100.00 at 20% off implies an original price of 125.00.
        let items = [discounted_item(
            1,
            Decimal::new(100_00, 2),
            1,
            Decimal::from(20u32),
        )];

        assert_eq!(savings(&items), Decimal::new(25_00, 2));
    }

    #[test]
    fn savings_scales_with_quantity() {
        // 10.00 at 50% off implies 20.00 originally; 10.00 saved per unit.
        let items = [discounted_item(
            1,
            Decimal::new(10_00, 2),
            2,
            Decimal::from(50u32),
        )];

        assert_eq!(savings(&items), Decimal::new(20_00, 2));
    }

    #[test]
    fn savings_ignores_items_without_a_meaningful_discount() {
        let items = [
            line_item(1, Decimal::new(10_00, 2), 1),
            discounted_item(2, Decimal::new(10_00, 2), 1, Decimal::ZERO),
            discounted_item(3, Decimal::new(10_00, 2), 1, Decimal::ONE_HUNDRED),
            discounted_item(4, Decimal::new(10_00, 2), 1, Decimal::from(120u32)),
        ];

        assert_eq!(savings(&items), Decimal::ZERO);
    }

    #[test]
    fn tax_is_kept_at_full_precision() {
        // 10% of 55.15 is 5.515; no intermediate rounding to 5.52.
        let items = [line_item(1, Decimal::new(55_15, 2), 1)];

        assert_eq!(tax(&items), Decimal::new(5_515, 3));
    }

    #[test]
    fn amount_due_minor_rounds_midpoints_away_from_zero() -> TestResult {
        // Grand total 55.15 × 1.1 = 60.665; 6066.5 cents rounds up to 6067.
        let items = [line_item(1, Decimal::new(55_15, 2), 1)];

        assert_eq!(amount_due_minor(&items, USD)?, 6067);

        Ok(())
    }

    #[test]
    fn amount_due_minor_matches_exact_totals() -> TestResult {
        let items = [
            line_item(1, Decimal::new(20_00, 2), 2),
            line_item(2, Decimal::new(15_00, 2), 1),
        ];

        assert_eq!(amount_due_minor(&items, USD)?, 6050);

        Ok(())
    }

    #[test]
    fn amount_due_minor_overflow_returns_error() {
        let items = [line_item(1, Decimal::MAX, 1)];

        let result = amount_due_minor(&items, USD);

        assert!(
            matches!(result, Err(PricingError::AmountOutOfRange(_))),
            "expected AmountOutOfRange error, got {result:?}"
        );
    }

    #[test]
    fn totals_of_matches_the_standalone_functions() {
        let items = [
            discounted_item(1, Decimal::new(20_00, 2), 2, Decimal::from(20u32)),
            line_item(2, Decimal::new(15_00, 2), 1),
        ];

        let totals = CartTotals::of(&items);

        assert_eq!(totals.subtotal, subtotal(&items));
        assert_eq!(totals.savings, savings(&items));
        assert_eq!(totals.tax, tax(&items));
        assert_eq!(totals.shipping_fee, shipping_fee(&items));
        assert_eq!(totals.grand_total, grand_total(&items));
    }

    #[test]
    fn rounded_view_rounds_midpoints_away_from_zero() {
        let items = [line_item(1, Decimal::new(55_15, 2), 1)];

        let totals = CartTotals::of(&items);
        let rounded = totals.rounded();

        // Full precision inside, 2 fraction digits at the display edge.
        assert_eq!(totals.grand_total, Decimal::new(60_665, 3));
        assert_eq!(rounded.grand_total, Decimal::new(60_67, 2));
        assert_eq!(rounded.tax, Decimal::new(5_52, 2));
    }
}
