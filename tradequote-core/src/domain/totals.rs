//! Quote totals engine
//!
//! Pure projection of (ledger, margin percent) into the money figures
//! shown on every export. Internal values stay unrounded; rounding to
//! two decimal places happens only at presentation time via
//! [`format_money`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::GST_RATE;
use crate::domain::line_item::Ledger;

/// Computed money figures for one quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub subtotal: Decimal,
    pub margin_percent: Decimal,
    pub taxable_amount: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Compute quote totals from a ledger and margin percentage
///
/// Total over its domain: an empty ledger yields all-zero figures and
/// blank rows contribute zero. The function is pure; repeated calls on
/// an unchanged ledger return identical output.
pub fn compute_totals(ledger: &Ledger, margin_percent: Decimal) -> QuoteTotals {
    let subtotal: Decimal = ledger.rows().iter().map(|item| item.line_total()).sum();
    let taxable_amount = subtotal * (Decimal::ONE + margin_percent / Decimal::ONE_HUNDRED);
    let tax = taxable_amount * GST_RATE;
    QuoteTotals {
        subtotal,
        margin_percent,
        taxable_amount,
        tax,
        total: taxable_amount + tax,
    }
}

/// Format a money amount for presentation: two decimal places,
/// midpoint rounded away from zero
pub fn format_money(amount: Decimal) -> String {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::line_item::LineItemField;

    fn ledger_with(rows: &[(&str, &str, &str)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (description, quantity, price) in rows {
            let id = ledger.add_row();
            ledger.update_field(id, LineItemField::Description, description);
            ledger.update_field(id, LineItemField::Quantity, quantity);
            ledger.update_field(id, LineItemField::UnitPrice, price);
        }
        ledger
    }

    #[test]
    fn test_tap_install_scenario() {
        let ledger = ledger_with(&[("Install tap", "2", "45.00")]);
        let totals = compute_totals(&ledger, Decimal::new(10, 0));
        assert_eq!(format_money(totals.subtotal), "90.00");
        assert_eq!(format_money(totals.taxable_amount), "99.00");
        assert_eq!(format_money(totals.tax), "9.90");
        assert_eq!(format_money(totals.total), "108.90");
    }

    #[test]
    fn test_empty_ledger_is_all_zero_for_any_margin() {
        for margin in [Decimal::ZERO, Decimal::new(10, 0), Decimal::new(250, 0)] {
            let totals = compute_totals(&Ledger::new(), margin);
            assert_eq!(totals.subtotal, Decimal::ZERO);
            assert_eq!(totals.tax, Decimal::ZERO);
            assert_eq!(totals.total, Decimal::ZERO);
        }
    }

    #[test]
    fn test_blank_rows_contribute_zero() {
        let mut ledger = ledger_with(&[("Labour", "3", "80")]);
        ledger.add_row();
        ledger.add_row();
        let totals = compute_totals(&ledger, Decimal::ZERO);
        assert_eq!(totals.subtotal, Decimal::new(240, 0));
    }

    #[test]
    fn test_removal_does_not_affect_remaining_rows() {
        let mut ledger = ledger_with(&[("a", "1", "10"), ("b", "2", "20"), ("c", "3", "30")]);
        let middle = ledger.rows()[1].id;
        ledger.remove_row(middle);
        let totals = compute_totals(&ledger, Decimal::ZERO);
        assert_eq!(totals.subtotal, Decimal::new(100, 0));
    }

    #[test]
    fn test_idempotent_over_unchanged_ledger() {
        let ledger = ledger_with(&[("Install tap", "2", "45.00")]);
        let first = compute_totals(&ledger, Decimal::new(15, 0));
        let second = compute_totals(&ledger, Decimal::new(15, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_presentation_rounding_only() {
        // 3 * 3.333 = 9.999; taxable with 0 margin stays unrounded internally
        let ledger = ledger_with(&[("offcuts", "3", "3.333")]);
        let totals = compute_totals(&ledger, Decimal::ZERO);
        assert_eq!(totals.subtotal.to_string(), "9.999");
        assert_eq!(format_money(totals.subtotal), "10.00");
    }
}
