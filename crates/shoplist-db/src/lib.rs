//! # shoplist-db: Database Layer for Shoplist
//!
//! This crate provides database access and the list services for Shoplist.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplist Data Flow                               │
//! │                                                                         │
//! │  REST handler (PUT /shoppingListItem)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shoplist-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌───────────────┐   │   │
//! │  │   │   Services    │   │  Repositories  │   │  Migrations   │   │   │
//! │  │   │               │   │                │   │  + Seed       │   │   │
//! │  │   │ ListStore     │──►│ Catalog        │   │               │   │   │
//! │  │   │ ListViews     │   │ ShoppingList   │   │ 001_initial_  │   │   │
//! │  │   │ ListSearch    │   │ ListItem       │   │ schema.sql    │   │   │
//! │  │   └───────────────┘   └───────┬────────┘   └───────────────┘   │   │
//! │  │                               │                                 │   │
//! │  │                      ┌────────▼────────┐                        │   │
//! │  │                      │ Database (pool) │                        │   │
//! │  │                      └─────────────────┘                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (shoplist.db)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`seed`] - One-time catalog seeding
//! - [`error`] - Database error types
//! - [`repository`] - Per-entity SQL (catalog, lists, lines)
//! - [`service`] - List store, list views and search
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoplist_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("shoplist.db")).await?;
//! db.seed_catalog().await?;
//!
//! let id = db.list_store().create_list("Grocery", "Amazon").await?;
//! let views = db.search().search_by_title_keyword("Groc").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::catalog::CatalogRepository;
pub use repository::list_item::ListItemRepository;
pub use repository::shopping_list::ShoppingListRepository;

// Service re-exports
pub use service::list_store::ListStore;
pub use service::search::ListSearch;
pub use service::views::ListViews;
pub use service::{ServiceError, ServiceResult};
