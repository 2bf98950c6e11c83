//! # Domain Types
//!
//! Core domain types used throughout Shoplist.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Catalog (seeded once)           Lists (client owned)                   │
//! │  ┌─────────────────┐             ┌─────────────────┐                    │
//! │  │ UnitMeasurement │◄──┐         │  ShoppingList   │                    │
//! │  │  id, title      │   │         │  id, title,     │                    │
//! │  └─────────────────┘   │         │  store_name     │                    │
//! │  ┌─────────────────┐   │         └────────┬────────┘                    │
//! │  │      Item       │───┘                  │ owns (cascade delete)       │
//! │  │  id, title,     │◄──────┐     ┌────────▼────────┐                    │
//! │  │  price,         │       └─────│ShoppingListItem │                    │
//! │  │  discount %     │  lookup     │ (list, item) PK │                    │
//! │  └─────────────────┘             │ quantity, totals│                    │
//! │                                  └─────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A line copies the item's unit price and discount the first time the item
//! is added to a list. Later catalog changes never touch existing lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing::{compute_line_totals, LineTotals};

// =============================================================================
// Catalog
// =============================================================================

/// Unit an item is sold in (`EACH`, `PACK`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UnitMeasurement {
    pub id: i64,
    pub title: String,
}

/// A catalog item that can be put on a shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    pub id: i64,

    /// Display name, the only field that appears in list views.
    pub title: String,

    /// Unit price (>= 0).
    pub price: f64,

    /// Discount in percent (0-100).
    pub discount_percentage: f64,

    pub unit_measurement_id: i64,
}

// =============================================================================
// Shopping List
// =============================================================================

/// A named shopping list for a store.
///
/// `(title, store_name)` is unique among existing lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ShoppingList {
    pub id: i64,
    pub title: String,
    pub store_name: String,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
}

/// Partial update of a shopping list.
///
/// Empty strings are treated as "not provided", so a client sending
/// `{"title": "", "store": "Amazon1"}` only changes the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUpdate {
    pub title: Option<String>,
    pub store_name: Option<String>,
}

impl ListUpdate {
    /// Builds an update, dropping empty fields. Whitespace is kept as sent.
    pub fn new(title: Option<String>, store_name: Option<String>) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        ListUpdate {
            title: keep(title),
            store_name: keep(store_name),
        }
    }

    /// Whether at least one field will change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.store_name.is_none()
    }
}

// =============================================================================
// Shopping List Item (line)
// =============================================================================

/// The aggregated (list, item) association.
///
/// Identity is the composite `(shopping_list_id, item_id)`. Repeated adds of
/// the same item raise `quantity`; the four derived fields are always
/// recomputed from `actual_item_price`, `discount_percentage` and `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ShoppingListItem {
    pub shopping_list_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    /// Unit price at first add (frozen).
    pub actual_item_price: f64,
    /// Discount percent at first add (frozen).
    pub discount_percentage: f64,
    pub discount_per_item: f64,
    pub discounted_item_price: f64,
    pub actual_total_price: f64,
    pub discounted_total_price: f64,
}

impl ShoppingListItem {
    /// Starts an empty line for `item` on a list, snapshotting its price.
    ///
    /// The line has `quantity = 0` until [`add_quantity`](Self::add_quantity)
    /// is called.
    pub fn snapshot(shopping_list_id: i64, item: &Item) -> Self {
        let mut line = ShoppingListItem {
            shopping_list_id,
            item_id: item.id,
            quantity: 0,
            actual_item_price: item.price,
            discount_percentage: item.discount_percentage,
            discount_per_item: 0.0,
            discounted_item_price: 0.0,
            actual_total_price: 0.0,
            discounted_total_price: 0.0,
        };
        line.recompute();
        line
    }

    /// Raises the quantity and recomputes every derived field.
    pub fn add_quantity(&mut self, quantity: i64) {
        self.quantity += quantity;
        self.recompute();
    }

    /// Re-derives the pricing fields from the snapshot and the current quantity.
    pub fn recompute(&mut self) {
        let totals = compute_line_totals(
            self.actual_item_price,
            self.discount_percentage,
            self.quantity,
        );
        self.apply(totals);
    }

    /// Returns the derived pricing fields.
    pub fn totals(&self) -> LineTotals {
        LineTotals {
            discount_per_item: self.discount_per_item,
            discounted_item_price: self.discounted_item_price,
            actual_total_price: self.actual_total_price,
            discounted_total_price: self.discounted_total_price,
        }
    }

    fn apply(&mut self, totals: LineTotals) {
        self.discount_per_item = totals.discount_per_item;
        self.discounted_item_price = totals.discounted_item_price;
        self.actual_total_price = totals.actual_total_price;
        self.discounted_total_price = totals.discounted_total_price;
    }
}

// =============================================================================
// Text Matching
// =============================================================================

/// How a title is compared against a client-supplied string.
///
/// Kept as a separate contract so the storage layer decides how each variant
/// is executed (case sensitivity, collation) without callers changing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    /// Whole title equals the string.
    Exact(String),
    /// Title contains the string, case-sensitive.
    Contains(String),
}

impl TextMatch {
    /// The string being searched for.
    pub fn needle(&self) -> &str {
        match self {
            TextMatch::Exact(s) | TextMatch::Contains(s) => s,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn water_bottle() -> Item {
        Item {
            id: 1,
            title: "Water Bottle".to_string(),
            price: 100.0,
            discount_percentage: 1.0,
            unit_measurement_id: 1,
        }
    }

    #[test]
    fn test_snapshot_starts_empty() {
        let line = ShoppingListItem::snapshot(1, &water_bottle());
        assert_eq!(line.quantity, 0);
        assert_eq!(line.actual_item_price, 100.0);
        assert_eq!(line.discount_per_item, 1.0);
        assert_eq!(line.discounted_item_price, 99.0);
        assert_eq!(line.actual_total_price, 0.0);
    }

    #[test]
    fn test_add_quantity_accumulates() {
        let mut line = ShoppingListItem::snapshot(1, &water_bottle());
        line.add_quantity(2);
        line.add_quantity(3);

        assert_eq!(line.quantity, 5);
        assert_eq!(line.actual_total_price, 500.0);
        assert_eq!(line.discounted_total_price, 495.0);
    }

    #[test]
    fn test_snapshot_ignores_later_price_change() {
        let mut item = water_bottle();
        let mut line = ShoppingListItem::snapshot(1, &item);
        line.add_quantity(1);

        item.price = 150.0;
        line.add_quantity(1);

        assert_eq!(line.actual_item_price, 100.0);
        assert_eq!(line.actual_total_price, 200.0);
    }

    #[test]
    fn test_list_update_drops_empty_fields() {
        let update = ListUpdate::new(Some("".to_string()), Some("Amazon1".to_string()));
        assert_eq!(update.title, None);
        assert_eq!(update.store_name.as_deref(), Some("Amazon1"));
        assert!(!update.is_empty());

        let update = ListUpdate::new(Some(String::new()), None);
        assert!(update.is_empty());
    }

    #[test]
    fn test_list_update_keeps_whitespace_fields() {
        let update = ListUpdate::new(Some("  ".to_string()), None);
        assert_eq!(update.title.as_deref(), Some("  "));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_text_match_needle() {
        assert_eq!(TextMatch::Exact("Grocery".into()).needle(), "Grocery");
        assert_eq!(TextMatch::Contains("Groc".into()).needle(), "Groc");
    }
}
