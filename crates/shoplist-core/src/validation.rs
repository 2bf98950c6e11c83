//! # Validation Module
//!
//! Input validation for Shoplist requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: REST handler (axum)                                          │
//! │  ├── Type validation (JSON deserialization → 400)                      │
//! │  └── THIS MODULE: field rules (non-empty, length, quantity)            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Services (shoplist-db)                                       │
//! │  └── Existence checks (list / item) → Conflict                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── UNIQUE (title, store_name)                                        │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoplist_core::validation::{validate_list_name, validate_quantity};
//!
//! assert!(validate_list_name("title", "Grocery").is_ok());
//! assert!(validate_list_name("store", "").is_err());
//! assert!(validate_quantity(5).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::ListUpdate;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a list title or store name.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_NAME_LENGTH`] characters
///
/// Whitespace counts like any other character; names are stored as sent.
/// `field` is the client-facing field name (`"title"`, `"store"`) used in
/// the error message.
pub fn validate_list_name(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a partial list update.
///
/// ## Rules
/// - At least one of title / store must be provided
/// - Each provided field obeys [`validate_list_name`]
pub fn validate_list_update(update: &ListUpdate) -> ValidationResult<()> {
    if update.is_empty() {
        return Err(ValidationError::NothingToUpdate {
            message: "Either title or store name is required".to_string(),
        });
    }

    if let Some(title) = &update.title {
        validate_list_name("title", title)?;
    }
    if let Some(store) = &update.store_name {
        validate_list_name("store", store)?;
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added to a list.
///
/// ## Rules
/// - Must be positive (> 0). There is no upper bound.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_list_name() {
        assert!(validate_list_name("title", "Grocery").is_ok());
        assert!(validate_list_name("title", &"A".repeat(64)).is_ok());

        let err = validate_list_name("store", "").unwrap_err();
        assert_eq!(err.to_string(), "store is not provided");
        assert!(validate_list_name("title", &"A".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_list_name_keeps_whitespace() {
        assert!(validate_list_name("title", "   ").is_ok());

        // Padding counts toward the length limit
        let padded = format!(" {} ", "A".repeat(63));
        let err = validate_list_name("store", &padded).unwrap_err();
        assert_eq!(err.to_string(), "store must be at most 64 characters");
        assert!(validate_list_name("store", &format!(" {}", "A".repeat(63))).is_ok());
    }

    #[test]
    fn test_validate_list_update() {
        let err = validate_list_update(&ListUpdate::new(None, Some("".into()))).unwrap_err();
        assert_eq!(err.to_string(), "Either title or store name is required");

        assert!(validate_list_update(&ListUpdate::new(Some("Grocery New".into()), None)).is_ok());
        assert!(validate_list_update(&ListUpdate::new(None, Some("A".repeat(80)))).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(i64::MAX).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }
}
