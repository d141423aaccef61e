//! Receipt
//!
//! Order-summary rendering for the checkout view: one table row per line
//! item, followed by the order figures derived from them.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::LineItem,
    pricing::{CartTotals, round_for_display},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The rendered receipt could not be written out.
    #[error("failed to write receipt")]
    Io(#[from] io::Error),
}

/// Order summary for one cart state.
///
/// Captures the line items together with the figures derived from them, so
/// the summary stays internally consistent even if the cart moves on after
/// capture.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    items: &'a [LineItem],
    totals: CartTotals,
    currency: &'static Currency,
}

impl<'a> Receipt<'a> {
    /// Capture the order summary for the given line items.
    #[must_use]
    pub fn new(items: &'a [LineItem], currency: &'static Currency) -> Self {
        Receipt {
            items,
            totals: CartTotals::of(items),
            currency,
        }
    }

    /// The order figures backing the summary lines.
    #[must_use]
    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    /// Currency used for all monetary values.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Writes the receipt: the item table, then the summary lines.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::Io`] if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        self.write_item_table(&mut out)?;
        self.write_summary(&mut out)?;

        Ok(())
    }

    fn write_item_table(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Qty", "Unit", "Price"]);

        for (idx, item) in self.items.iter().enumerate() {
            builder.push_record([
                format!("#{:<2}", idx + 1),
                item.title.clone(),
                item.quantity.to_string(),
                self.money(round_for_display(item.unit_price)),
                self.money(round_for_display(item.total_price)),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "{table}")?;

        Ok(())
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let totals = self.totals.rounded();
        let mut lines: SmallVec<[(&str, String); 5]> = SmallVec::new();

        lines.push(("Subtotal:", self.money(totals.subtotal)));

        // The savings line is promotional; hide it when there is nothing
        // to celebrate.
        if totals.savings > Decimal::ZERO {
            lines.push(("Savings:", format!("-{}", self.money(totals.savings))));
        }

        lines.push(("Tax:", self.money(totals.tax)));

        let shipping = if totals.shipping_fee.is_zero() {
            "FREE".to_string()
        } else {
            self.money(totals.shipping_fee)
        };

        lines.push(("Shipping:", shipping));
        lines.push(("Total:", self.money(totals.grand_total)));

        let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        for (label, value) in lines {
            writeln!(out, " {label:<label_width$}  {value:>value_width$}")?;
        }

        Ok(())
    }

    fn money(&self, amount: Decimal) -> String {
        Money::from_decimal(amount, self.currency).to_string()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rusty_money::iso::{GBP, USD};
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

    #[test]
    fn renders_item_rows_and_flat_shipping_below_threshold() -> TestResult {
        let items = [
            line_item(1, Decimal::new(20_00, 2), 1),
            line_item(2, Decimal::new(15_00, 2), 1),
        ];

        let receipt = Receipt::new(&items, USD);

        let mut out = Vec::new();
        receipt.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Product 1"));
        assert!(output.contains("Product 2"));
        assert!(output.contains("Subtotal:"));
        assert!(output.contains("$35.00"));
        assert!(output.contains("$5.99"));
        assert!(output.contains("$44.49"));

        Ok(())
    }

    #[test]
    fn renders_free_shipping_above_threshold() -> TestResult {
        let items = [
            line_item(1, Decimal::new(20_00, 2), 2),
            line_item(2, Decimal::new(15_00, 2), 1),
        ];

        let receipt = Receipt::new(&items, USD);

        let mut out = Vec::new();
        receipt.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("FREE"));
        assert!(output.contains("$60.50"));

        Ok(())
    }

    #[test]
    fn omits_savings_line_when_nothing_was_saved() -> TestResult {
        let items = [line_item(1, Decimal::new(10_00, 2), 1)];

        let receipt = Receipt::new(&items, USD);

        let mut out = Vec::new();
        receipt.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(!output.contains("Savings:"));

        Ok(())
    }

    #[test]
    fn renders_savings_line_for_discounted_items() -> TestResult {
        // 100.00 at 20% off implies 125.00 originally; 25.00 saved.
        let mut item = line_item(1, Decimal::new(100_00, 2), 1);
        item.discount_percentage = Some(Decimal::from(20u32));

        let items = [item];
        let receipt = Receipt::new(&items, USD);

        let mut out = Vec::new();
        receipt.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Savings:"));
        assert!(output.contains("-$25.00"));

        Ok(())
    }

    #[test]
    fn formats_in_the_given_currency() -> TestResult {
        let items = [line_item(1, Decimal::new(20_00, 2), 1)];

        let receipt = Receipt::new(&items, GBP);

        let mut out = Vec::new();
        receipt.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("£20.00"));
        assert_eq!(receipt.currency(), GBP);

        Ok(())
    }

    #[test]
    fn totals_accessor_matches_derived_figures() {
        let items = [line_item(1, Decimal::new(20_00, 2), 1)];

        let receipt = Receipt::new(&items, USD);

        assert_eq!(receipt.totals(), &CartTotals::of(&items));
    }

    #[test]
    fn write_errors_surface_as_io() {
        struct FailingWriter;

        impl io::Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let items = [line_item(1, Decimal::ONE, 1)];
        let receipt = Receipt::new(&items, USD);

        let result = receipt.write_to(FailingWriter);

        assert!(
            matches!(result, Err(ReceiptError::Io(_))),
            "expected Io error, got {result:?}"
        );
    }
}
