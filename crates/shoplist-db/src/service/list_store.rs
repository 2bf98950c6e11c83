//! # List Store
//!
//! Write operations on shopping lists.
//!
//! ## Checks Before Writes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_list   validate title, store → pair free?     → insert         │
//! │  update_list   validate update       → list exists?   → update         │
//! │  delete_list                           list exists?   → delete (tx)    │
//! │  add_item      validate quantity     → item exists?                    │
//! │                                      → list exists?   → upsert (tx)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed check returns before anything is written. The storage layer
//! still enforces the same rules (UNIQUE index, foreign keys, affected row
//! counts) for the window between check and write; those failures are
//! mapped back onto the same [`CoreError`] variants.

use tracing::{debug, info};

use crate::error::DbError;
use crate::pool::Database;
use crate::service::{ServiceError, ServiceResult};
use shoplist_core::validation::{validate_list_name, validate_list_update, validate_quantity};
use shoplist_core::{CoreError, Item, ListUpdate, ListView, ShoppingList};

/// Shopping list write service.
#[derive(Debug, Clone)]
pub struct ListStore {
    db: Database,
}

impl ListStore {
    pub fn new(db: Database) -> Self {
        ListStore { db }
    }

    /// Creates a list and returns its id.
    ///
    /// ## Errors
    /// * `CoreError::Validation` - empty or overlong title / store
    /// * `CoreError::DuplicateShoppingList` - the pair already names a list
    pub async fn create_list(&self, title: &str, store_name: &str) -> ServiceResult<i64> {
        validate_list_name("title", title)?;
        validate_list_name("store", store_name)?;

        let lists = self.db.shopping_lists();
        let duplicate = || CoreError::DuplicateShoppingList {
            title: title.to_string(),
            store_name: store_name.to_string(),
        };

        if lists.find_by_title_and_store(title, store_name).await?.is_some() {
            return Err(duplicate().into());
        }

        let id = lists.insert(title, store_name).await.map_err(|err| match err {
            DbError::UniqueViolation { .. } => ServiceError::Core(duplicate()),
            other => ServiceError::Db(other),
        })?;

        info!(id, title = %title, store_name = %store_name, "Shopping list created");
        Ok(id)
    }

    /// Applies a partial update and returns the list id.
    ///
    /// ## Errors
    /// * `CoreError::Validation` - nothing to update, or a bad field
    /// * `CoreError::ShoppingListNotFound` - unknown id
    /// * `CoreError::DuplicateShoppingList` - the result collides with another list
    pub async fn update_list(&self, id: i64, update: ListUpdate) -> ServiceResult<i64> {
        validate_list_update(&update)?;

        let current = self.require_list(id).await?;
        let title = update.title.clone().unwrap_or(current.title);
        let store_name = update.store_name.clone().unwrap_or(current.store_name);

        self.db
            .shopping_lists()
            .update(id, &update)
            .await
            .map_err(|err| match err {
                DbError::NotFound { .. } => CoreError::ShoppingListNotFound(id).into(),
                DbError::UniqueViolation { .. } => {
                    CoreError::DuplicateShoppingList { title, store_name }.into()
                }
                other => ServiceError::Db(other),
            })?;

        info!(id, "Shopping list updated");
        Ok(id)
    }

    /// Deletes a list together with its lines and returns the id.
    ///
    /// ## Errors
    /// * `CoreError::ShoppingListNotFound` - unknown id
    pub async fn delete_list(&self, id: i64) -> ServiceResult<i64> {
        self.db
            .shopping_lists()
            .delete_with_items(id)
            .await
            .map_err(|err| match err {
                DbError::NotFound { .. } => CoreError::ShoppingListNotFound(id).into(),
                other => ServiceError::Db(other),
            })?;

        info!(id, "Shopping list deleted");
        Ok(id)
    }

    /// Adds `quantity` of an item to a list and returns the list's view.
    ///
    /// The item is checked before the list.
    ///
    /// ## Errors
    /// * `CoreError::Validation` - quantity not positive
    /// * `CoreError::ItemNotFound` - unknown item id
    /// * `CoreError::ShoppingListNotFound` - unknown list id
    pub async fn add_item(
        &self,
        shopping_list_id: i64,
        item_id: i64,
        quantity: i64,
    ) -> ServiceResult<ListView> {
        validate_quantity(quantity)?;

        let item = self.require_item(item_id).await?;
        let list = self.require_list(shopping_list_id).await?;

        self.db
            .list_items()
            .add_quantity(list.id, &item, quantity)
            .await
            .map_err(|err| match err {
                DbError::ForeignKeyViolation { .. } => {
                    CoreError::ShoppingListNotFound(shopping_list_id).into()
                }
                other => ServiceError::Db(other),
            })?;

        debug!(shopping_list_id, item_id, quantity, "Item added, building view");
        self.db.views().build_list_view(&list).await
    }

    /// Gets a catalog item or fails with `ItemNotFound`.
    pub async fn require_item(&self, item_id: i64) -> ServiceResult<Item> {
        self.db
            .catalog()
            .get_item(item_id)
            .await?
            .ok_or_else(|| CoreError::ItemNotFound(item_id).into())
    }

    /// Gets a list or fails with `ShoppingListNotFound`.
    pub async fn require_list(&self, id: i64) -> ServiceResult<ShoppingList> {
        self.db
            .shopping_lists()
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::ShoppingListNotFound(id).into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbConfig;
    use shoplist_core::ValidationError;

    async fn seeded() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.seed_catalog().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_create_list_returns_sequential_ids() {
        let db = seeded().await;
        let store = db.list_store();

        assert_eq!(store.create_list("Grocery", "Amazon").await.unwrap(), 1);
        assert_eq!(store.create_list("Custom", "Amazon").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_create_leaves_count_unchanged() {
        let db = seeded().await;
        let store = db.list_store();
        store.create_list("Grocery", "Amazon").await.unwrap();

        let err = store.create_list("Grocery", "Amazon").await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Core(CoreError::DuplicateShoppingList { .. })
        ));
        assert_eq!(db.shopping_lists().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_validates_title_before_store() {
        let db = seeded().await;

        let err = db.list_store().create_list("", "").await.unwrap_err();
        match err {
            ServiceError::Core(CoreError::Validation(ValidationError::Required { field })) => {
                assert_eq!(field, "title")
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = db.list_store().create_list("Grocery", "").await.unwrap_err();
        assert_eq!(err.to_string(), "Validation error: store is not provided");
        assert_eq!(db.shopping_lists().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_names_are_stored_as_sent() {
        let db = seeded().await;
        let store = db.list_store();

        let id = store.create_list(" ", "  Amazon ").await.unwrap();
        let list = store.require_list(id).await.unwrap();
        assert_eq!(list.title, " ");
        assert_eq!(list.store_name, "  Amazon ");

        let update = ListUpdate::new(Some("   ".to_string()), None);
        store.update_list(id, update).await.unwrap();
        assert_eq!(store.require_list(id).await.unwrap().title, "   ");
    }

    #[tokio::test]
    async fn test_update_list() {
        let db = seeded().await;
        let store = db.list_store();
        let id = store.create_list("Grocery", "Amazon").await.unwrap();

        let update = ListUpdate::new(Some(String::new()), Some("Amazon1".to_string()));
        assert_eq!(store.update_list(id, update).await.unwrap(), id);

        let list = store.require_list(id).await.unwrap();
        assert_eq!(list.title, "Grocery");
        assert_eq!(list.store_name, "Amazon1");
    }

    #[tokio::test]
    async fn test_update_errors() {
        let db = seeded().await;
        let store = db.list_store();
        store.create_list("Grocery", "Amazon").await.unwrap();
        let other = store.create_list("Custom", "Amazon").await.unwrap();

        let err = store.update_list(other, ListUpdate::default()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Either title or store name is required"
        );

        let update = ListUpdate::new(Some("Grocery".to_string()), None);
        let err = store.update_list(42, update.clone()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Core(CoreError::ShoppingListNotFound(42))));

        let err = store.update_list(other, update).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Core(CoreError::DuplicateShoppingList { .. })
        ));
        let list = store.require_list(other).await.unwrap();
        assert_eq!(list.title, "Custom");
    }

    #[tokio::test]
    async fn test_delete_list_removes_lines() {
        let db = seeded().await;
        let store = db.list_store();
        let id = store.create_list("Grocery", "Amazon").await.unwrap();
        store.add_item(id, 1, 1).await.unwrap();
        store.add_item(id, 2, 4).await.unwrap();

        assert_eq!(store.delete_list(id).await.unwrap(), id);

        assert_eq!(db.list_items().count_for_list(id).await.unwrap(), 0);
        assert!(db.search().get_all().await.unwrap().is_empty());

        let err = store.delete_list(id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Core(CoreError::ShoppingListNotFound(_))));
    }

    #[tokio::test]
    async fn test_add_item_scenario() {
        let db = seeded().await;
        let store = db.list_store();
        let id = store.create_list("Grocery", "Amazon").await.unwrap();

        let view = store.add_item(id, 1, 1).await.unwrap();
        assert_eq!(view.shopping_list_title, "Grocery");
        assert_eq!(view.store_name, "Amazon");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].item_title, "Water Bottle");
        assert_eq!(view.items[0].actual_total_price, 100.0);
        assert_eq!(view.items[0].discounted_total_price, 99.0);

        let view = store.add_item(id, 1, 2).await.unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 3);
        assert_eq!(view.items[0].actual_total_price, 300.0);
        assert_eq!(view.items[0].discounted_total_price, 297.0);
    }

    #[tokio::test]
    async fn test_add_item_checks_item_before_list() {
        let db = seeded().await;
        let store = db.list_store();

        let err = store.add_item(42, 404, 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::Core(CoreError::ItemNotFound(404))));

        let err = store.add_item(42, 1, 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::Core(CoreError::ShoppingListNotFound(42))));
    }

    #[tokio::test]
    async fn test_add_item_rejects_bad_quantity() {
        let db = seeded().await;
        let store = db.list_store();
        let id = store.create_list("Grocery", "Amazon").await.unwrap();

        for quantity in [0, -1] {
            let err = store.add_item(id, 1, quantity).await.unwrap_err();
            assert!(matches!(err, ServiceError::Core(CoreError::Validation(_))));
        }
        assert_eq!(db.list_items().count_for_list(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_item_accepts_large_quantity() {
        let db = seeded().await;
        let store = db.list_store();
        let id = store.create_list("Grocery", "Amazon").await.unwrap();

        let view = store.add_item(id, 1, 1000).await.unwrap();
        assert_eq!(view.items[0].quantity, 1000);
        assert_eq!(view.items[0].actual_total_price, 100_000.0);

        let view = store.add_item(id, 1, 1_000_000).await.unwrap();
        assert_eq!(view.items[0].quantity, 1_001_000);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let config = DbConfig::new(dir.path().join("shoplist.db")).max_connections(5);
        let db = Database::new(config).await.unwrap();
        db.seed_catalog().await.unwrap();
        let id = db.list_store().create_list("Grocery", "Amazon").await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..50 {
            let store = db.list_store();
            handles.push(tokio::spawn(async move { store.add_item(id, 1, 1).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let line = db.list_items().get(id, 1).await.unwrap().unwrap();
        assert_eq!(line.quantity, 50);
        assert_eq!(line.actual_total_price, 5000.0);
        assert_eq!(line.discounted_total_price, 4950.0);

        db.close().await;
    }
}
