//! # Shoplist API
//!
//! REST server for shopping lists.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        REST API Server                                  │
//! │                                                                         │
//! │  Client ───► axum (5000) ───► /api/v1 routes ───► shoplist-db services │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                                        SQLite           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`build_router`] is shared by the binary and the integration tests so both
//! exercise the exact same routing table.

pub mod config;
pub mod error;
pub mod routes;

use axum::routing::get;
use axum::Router;

use shoplist_db::Database;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};

/// Prefix every shopping list route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Shared application state.
///
/// Cloned into every handler; the database handle is a pool reference.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .nest(API_PREFIX, routes::api_routes())
        .fallback(routes::fallback)
        .with_state(state)
}
