//! # Pricing Module
//!
//! Computes the discounted price of a catalog item and the totals of a list
//! line for a given cumulative quantity.
//!
//! ## Line Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Water Bottle: unit price 100, discount 1%, quantity 3                  │
//! │                                                                         │
//! │  discount_per_item      = 100 × 1 / 100         =   1.0                │
//! │  discounted_item_price  = 100 − 1.0             =  99.0                │
//! │  actual_total_price     = 100 × 3               = 300.0                │
//! │  discounted_total_price = 99.0 × 3              = 297.0                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recompute, Never Accumulate
//! Totals are always derived from the unit price and the *cumulative*
//! quantity. Adding 2 then 3 gives exactly the same line as adding 5 once;
//! there is no running sum that could drift.
//!
//! Values are plain `f64` to match the REAL columns of the store and the
//! JSON numbers clients already consume. Nothing is rounded here; display
//! formatting is a client concern.

use serde::{Deserialize, Serialize};

/// Derived pricing fields of a single list line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineTotals {
    /// Discount granted on one unit.
    pub discount_per_item: f64,
    /// Unit price after discount.
    pub discounted_item_price: f64,
    /// `unit_price × quantity`.
    pub actual_total_price: f64,
    /// `discounted_item_price × quantity`.
    pub discounted_total_price: f64,
}

/// Computes the pricing of a line.
///
/// Inputs are assumed validated upstream: `quantity` positive, price and
/// discount non-negative.
///
/// ## Example
/// ```rust
/// use shoplist_core::pricing::compute_line_totals;
///
/// let totals = compute_line_totals(200.0, 2.0, 2);
/// assert_eq!(totals.discount_per_item, 4.0);
/// assert_eq!(totals.discounted_item_price, 196.0);
/// assert_eq!(totals.actual_total_price, 400.0);
/// assert_eq!(totals.discounted_total_price, 392.0);
/// ```
pub fn compute_line_totals(unit_price: f64, discount_percentage: f64, quantity: i64) -> LineTotals {
    let discount_per_item = unit_price * discount_percentage / 100.0;
    let discounted_item_price = unit_price - discount_per_item;
    let quantity = quantity as f64;

    LineTotals {
        discount_per_item,
        discounted_item_price,
        actual_total_price: unit_price * quantity,
        discounted_total_price: discounted_item_price * quantity,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
