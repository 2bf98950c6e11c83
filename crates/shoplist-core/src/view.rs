//! # List View
//!
//! The nested read model returned by every list query: a shopping list plus
//! its resolved lines, with each line carrying only the item's title from the
//! catalog.
//!
//! ```json
//! {
//!   "shopping_list_title": "Grocery",
//!   "store_name": "Amazon",
//!   "items": [
//!     {
//!       "item_title": "Water Bottle",
//!       "actual_item_price": 100.0,
//!       "discount_percentage": 1.0,
//!       "discounted_item_price": 99.0,
//!       "quantity": 3,
//!       "actual_total_price": 300.0,
//!       "discounted_total_price": 297.0
//!     }
//!   ]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ShoppingList, ShoppingListItem};

/// A shopping list with its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListView {
    pub shopping_list_title: String,
    pub store_name: String,
    /// Always present; `[]` for a list without lines.
    pub items: Vec<ListViewItem>,
}

/// One line of a [`ListView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListViewItem {
    pub item_title: String,
    pub actual_item_price: f64,
    pub discount_percentage: f64,
    pub discounted_item_price: f64,
    pub quantity: i64,
    pub actual_total_price: f64,
    pub discounted_total_price: f64,
}

impl ListViewItem {
    /// Shapes a stored line under the given item title.
    pub fn from_line(item_title: impl Into<String>, line: &ShoppingListItem) -> Self {
        ListViewItem {
            item_title: item_title.into(),
            actual_item_price: line.actual_item_price,
            discount_percentage: line.discount_percentage,
            discounted_item_price: line.discounted_item_price,
            quantity: line.quantity,
            actual_total_price: line.actual_total_price,
            discounted_total_price: line.discounted_total_price,
        }
    }
}

/// Builds the view of one list.
///
/// `lines` must all belong to `list` and keep their storage order.
/// `item_titles` maps item id to title; a line whose item is absent from the
/// map gets an empty title (items are never deleted, so this only happens if
/// the caller passes an incomplete map).
pub fn build_list_view(
    list: &ShoppingList,
    lines: &[ShoppingListItem],
    item_titles: &HashMap<i64, String>,
) -> ListView {
    let items = lines
        .iter()
        .map(|line| {
            let title = item_titles
                .get(&line.item_id)
                .map(String::as_str)
                .unwrap_or_default();
            ListViewItem::from_line(title, line)
        })
        .collect();

    ListView {
        shopping_list_title: list.title.clone(),
        store_name: list.store_name.clone(),
        items,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;
    use chrono::Utc;

    fn list(id: i64, title: &str) -> ShoppingList {
        let now = Utc::now();
        ShoppingList {
            id,
            title: title.to_string(),
            store_name: "Amazon".to_string(),
            created_time: now,
            updated_time: now,
        }
    }

    fn item(id: i64, title: &str, price: f64, discount: f64) -> Item {
        Item {
            id,
            title: title.to_string(),
            price,
            discount_percentage: discount,
            unit_measurement_id: 1,
        }
    }

    #[test]
    fn test_empty_list_has_empty_items() {
        let view = build_list_view(&list(1, "Grocery"), &[], &HashMap::new());
        assert_eq!(view.shopping_list_title, "Grocery");
        assert!(view.items.is_empty());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["items"], serde_json::json!([]));
    }

    #[test]
    fn test_lines_keep_order_and_titles() {
        let water = item(1, "Water Bottle", 100.0, 1.0);
        let soap = item(5, "Soap", 500.0, 5.0);

        let mut first = ShoppingListItem::snapshot(1, &soap);
        first.add_quantity(2);
        let mut second = ShoppingListItem::snapshot(1, &water);
        second.add_quantity(3);

        let titles = HashMap::from([
            (1, water.title.clone()),
            (5, soap.title.clone()),
        ]);
        let view = build_list_view(&list(1, "Grocery"), &[first, second], &titles);

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].item_title, "Soap");
        assert_eq!(view.items[0].discounted_total_price, 950.0);
        assert_eq!(view.items[1].item_title, "Water Bottle");
        assert_eq!(view.items[1].quantity, 3);
        assert_eq!(view.items[1].discounted_total_price, 297.0);
    }

    #[test]
    fn test_view_only_exposes_item_title() {
        let water = item(1, "Water Bottle", 100.0, 1.0);
        let mut line = ShoppingListItem::snapshot(1, &water);
        line.add_quantity(1);

        let titles = HashMap::from([(1, water.title.clone())]);
        let view = build_list_view(&list(1, "Grocery"), &[line], &titles);
        let json = serde_json::to_value(&view.items[0]).unwrap();

        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "actual_item_price",
                "actual_total_price",
                "discount_percentage",
                "discounted_item_price",
                "discounted_total_price",
                "item_title",
                "quantity",
            ]
        );
    }
}
