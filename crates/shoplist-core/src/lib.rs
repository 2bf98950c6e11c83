//! # shoplist-core: Pure Business Logic for Shoplist
//!
//! This crate holds the domain model of the shopping list service as pure
//! functions and plain data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplist Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    REST API (apps/api)                          │   │
//! │  │   POST /shoppingList, PUT /shoppingListItem, GET /allShopping.. │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          shoplist-db (repositories, aggregation, search)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoplist-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   view    │  │ validation│  │   │
//! │  │   │   Item    │  │ LineTotals│  │  ListView │  │   rules   │  │   │
//! │  │   │ShoppingLst│  │           │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, ShoppingList, ShoppingListItem, ...)
//! - [`pricing`] - Discount and line total calculation
//! - [`view`] - Nested list-with-items read model
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shoplist_core::pricing::compute_line_totals;
//!
//! // Water Bottle: 100 at 1% off, three of them
//! let totals = compute_line_totals(100.0, 1.0, 3);
//!
//! assert_eq!(totals.discounted_item_price, 99.0);
//! assert_eq!(totals.actual_total_price, 300.0);
//! assert_eq!(totals.discounted_total_price, 297.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{compute_line_totals, LineTotals};
pub use types::*;
pub use view::{build_list_view, ListView, ListViewItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a list title or store name.
pub const MAX_NAME_LENGTH: usize = 64;
