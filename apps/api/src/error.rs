//! # API Error Type
//!
//! Unified error type for REST handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shoplist                               │
//! │                                                                         │
//! │  Handler → Result<T, ApiError>                                         │
//! │       │                                                                 │
//! │       ├── JsonRejection            → 400 BAD_REQUEST                   │
//! │       ├── ValidationError          → 400 VALIDATION_ERROR              │
//! │       ├── ShoppingListNotFound     → 409 SHOPPING_LIST_NOT_FOUND       │
//! │       ├── ItemNotFound             → 409 ITEM_NOT_FOUND                │
//! │       ├── DuplicateShoppingList    → 409 DUPLICATE_SHOPPING_LIST       │
//! │       ├── PathRejection            → 404 NOT_FOUND                     │
//! │       └── DbError                  → 500 DATABASE_ERROR (logged)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missing lists and items on writes are conflicts with the current state
//! of the store, not missing routes, hence 409 rather than 404.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use shoplist_core::{CoreError, ValidationError};
use shoplist_db::{DbError, ServiceError};

/// API error returned from handlers.
///
/// ## Serialization
/// This is the body a client receives when a request fails:
/// ```json
/// {
///   "code": "DUPLICATE_SHOPPING_LIST",
///   "message": "Shopping List already exist"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body could not be parsed (400)
    BadRequest,

    /// Input validation failed (400)
    ValidationError,

    /// Unknown shopping list on a write (409)
    ShoppingListNotFound,

    /// Unknown catalog item on a write (409)
    ItemNotFound,

    /// Title and store already used (409)
    DuplicateShoppingList,

    /// No such route or path segment (404)
    NotFound,

    /// Database operation failed (500)
    DatabaseError,

    /// Dependency unavailable (503)
    Unavailable,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::BadRequest | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::ShoppingListNotFound
            | ErrorCode::ItemNotFound
            | ErrorCode::DuplicateShoppingList => StatusCode::CONFLICT,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a route-level not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ShoppingListNotFound(_) => ApiError::new(
                ErrorCode::ShoppingListNotFound,
                "Shopping List does not exist",
            ),
            CoreError::ItemNotFound(_) => {
                ApiError::new(ErrorCode::ItemNotFound, "Item does not exist")
            }
            CoreError::DuplicateShoppingList { .. } => ApiError::new(
                ErrorCode::DuplicateShoppingList,
                "Shopping List already exist",
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::Unavailable, "Database pool exhausted")
            }
            other => {
                // Log the actual error but return a generic message
                tracing::error!(error = %other, "Database operation failed");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(e) => e.into(),
            ServiceError::Db(e) => e.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(ErrorCode::BadRequest, rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::not_found(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
