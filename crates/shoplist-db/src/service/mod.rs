//! # Services
//!
//! Operations that combine several repositories and enforce the domain
//! rules from `shoplist-core`.
//!
//! - [`ListStore`](list_store::ListStore) - create, update, delete, add item
//! - [`ListViews`](views::ListViews) - nested read model of lists
//! - [`ListSearch`](search::ListSearch) - list queries returning views

use thiserror::Error;

use crate::error::DbError;
use shoplist_core::{CoreError, ValidationError};

pub mod list_store;
pub mod search;
pub mod views;

/// Errors returned by services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violated (validation, not found, duplicate).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failure.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Core(CoreError::Validation(err))
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
