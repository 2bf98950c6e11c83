//! # Error Types
//!
//! Domain-specific error types for shoplist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoplist-core errors (this file)                                      │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shoplist-db errors (separate crate)                                   │
//! │  ├── DbError          - Database operation failures                    │
//! │  └── ServiceError     - CoreError | DbError from services              │
//! │                                                                         │
//! │  REST app errors                                                       │
//! │  └── ApiError         - { code, message } + HTTP status                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → ApiError → Client  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is raised before any write happens, so a caller that sees
/// one of these can rely on storage being untouched.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Shopping list id does not exist.
    ///
    /// ## When This Occurs
    /// - Update or delete of an unknown list
    /// - Adding an item to an unknown list
    #[error("Shopping List does not exist: {0}")]
    ShoppingListNotFound(i64),

    /// Catalog item id does not exist.
    #[error("Item does not exist: {0}")]
    ItemNotFound(i64),

    /// A list with the same title and store already exists.
    ///
    /// ## User Workflow
    /// ```text
    /// POST /shoppingList { title: "Grocery", store: "Amazon" }  → 201
    /// POST /shoppingList { title: "Grocery", store: "Amazon" }  → 409
    /// ```
    #[error("Shopping List already exist: '{title}' at '{store_name}'")]
    DuplicateShoppingList { title: String, store_name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when client input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is not provided")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// None of a set of optional fields was supplied.
    #[error("{message}")]
    NothingToUpdate { message: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ShoppingListNotFound(7);
        assert_eq!(err.to_string(), "Shopping List does not exist: 7");

        let err = CoreError::DuplicateShoppingList {
            title: "Grocery".to_string(),
            store_name: "Amazon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Shopping List already exist: 'Grocery' at 'Amazon'"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "store".to_string(),
        };
        assert_eq!(err.to_string(), "store is not provided");

        let err = ValidationError::TooLong {
            field: "title".to_string(),
            max: 64,
        };
        assert_eq!(err.to_string(), "title must be at most 64 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "title".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
