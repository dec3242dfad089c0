//! Line item and ledger domain models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single quote line item
///
/// Quantity and unit price are stored as already-coerced decimals;
/// raw user text goes through [`parse_amount`] at the edit boundary so
/// invalid input never reaches the totals engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable opaque row handle, independent of display position
    pub id: Uuid,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl LineItem {
    /// Create a blank line item
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            description: String::new(),
            quantity: Decimal::ZERO,
            unit_price: Decimal::ZERO,
        }
    }

    /// Derived line total, never stored
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// Which field of a line item an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Description,
    Quantity,
    UnitPrice,
}

/// Parse raw user text as a non-negative amount
///
/// Unparsable input coerces to zero rather than erroring, matching the
/// per-keystroke editing model. Negative values also coerce to zero so
/// the non-negativity invariant holds at the boundary instead of
/// inside the totals engine.
pub fn parse_amount(raw: &str) -> Decimal {
    match raw.trim().parse::<Decimal>() {
        Ok(value) if value >= Decimal::ZERO => value,
        _ => Decimal::ZERO,
    }
}

/// Ordered collection of line items for one quote draft
///
/// Insertion order is display order and export order. Rows are
/// addressed by their item id, never by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with the single blank row every new quote starts with
    pub fn with_blank_row() -> Self {
        Self {
            items: vec![LineItem::blank()],
        }
    }

    /// Append a blank row, returning its id
    pub fn add_row(&mut self) -> Uuid {
        let item = LineItem::blank();
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Remove a row by id
    ///
    /// A no-op when the id is absent (idempotent). Remaining rows keep
    /// their order and identity.
    pub fn remove_row(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
    }

    /// Update one field of a row from raw user text
    ///
    /// Quantity and price coerce through [`parse_amount`]; description
    /// stores the text verbatim. Returns false when the id is absent.
    pub fn update_field(&mut self, id: Uuid, field: LineItemField, raw: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        match field {
            LineItemField::Description => item.description = raw.to_string(),
            LineItemField::Quantity => item.quantity = parse_amount(raw),
            LineItemField::UnitPrice => item.unit_price = parse_amount(raw),
        }
        true
    }

    /// Get a row by id
    pub fn get(&self, id: Uuid) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Rows in display order
    pub fn rows(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_coercion() {
        assert_eq!(parse_amount("45.00"), Decimal::new(4500, 2));
        assert_eq!(parse_amount(" 2 "), Decimal::new(2, 0));
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("-3"), Decimal::ZERO);
    }

    #[test]
    fn test_new_quote_starts_with_one_blank_row() {
        let ledger = Ledger::with_blank_row();
        assert_eq!(ledger.len(), 1);
        let row = &ledger.rows()[0];
        assert_eq!(row.description, "");
        assert_eq!(row.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_remove_row_is_idempotent_and_preserves_order() {
        let mut ledger = Ledger::new();
        let a = ledger.add_row();
        let b = ledger.add_row();
        let c = ledger.add_row();
        ledger.update_field(a, LineItemField::Description, "first");
        ledger.update_field(c, LineItemField::Description, "third");

        ledger.remove_row(b);
        ledger.remove_row(b); // already gone, no-op

        let descriptions: Vec<&str> = ledger
            .rows()
            .iter()
            .map(|item| item.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["first", "third"]);
        // Surviving rows keep their identity
        assert_eq!(ledger.rows()[0].id, a);
        assert_eq!(ledger.rows()[1].id, c);
    }

    #[test]
    fn test_update_field_unknown_id_returns_false() {
        let mut ledger = Ledger::new();
        assert!(!ledger.update_field(Uuid::new_v4(), LineItemField::Quantity, "2"));
    }

    #[test]
    fn test_unparsable_quantity_coerces_to_zero_line_total() {
        let mut ledger = Ledger::new();
        let id = ledger.add_row();
        ledger.update_field(id, LineItemField::Quantity, "abc");
        ledger.update_field(id, LineItemField::UnitPrice, "5");
        assert_eq!(ledger.get(id).unwrap().line_total(), Decimal::ZERO);
    }
}
