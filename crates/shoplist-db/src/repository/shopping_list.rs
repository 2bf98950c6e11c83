//! # Shopping List Repository
//!
//! Database operations for `shopping_list` rows.
//!
//! ## List Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shopping List Lifecycle                              │
//! │                                                                         │
//! │  insert(title, store)          created_time = updated_time = now       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  update(id, ListUpdate)        only provided fields, updated_time = now│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  delete_with_items(id)         lines first, then the list (one tx)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every read returns lists in id order, which is creation order.

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{sorted_ids, title_predicate, IN_LIST_CHUNK};
use shoplist_core::{ListUpdate, ShoppingList, TextMatch};

const SELECT_LIST: &str = r#"
    SELECT id, title, store_name, created_time, updated_time
    FROM shopping_list
"#;

/// Repository for shopping list rows.
#[derive(Debug, Clone)]
pub struct ShoppingListRepository {
    pool: SqlitePool,
}

impl ShoppingListRepository {
    /// Creates a new ShoppingListRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ShoppingListRepository { pool }
    }

    /// Gets a list by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<ShoppingList>> {
        let list = sqlx::query_as::<_, ShoppingList>(&format!("{SELECT_LIST} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(list)
    }

    /// Gets the list with exactly this `(title, store_name)` pair.
    pub async fn find_by_title_and_store(
        &self,
        title: &str,
        store_name: &str,
    ) -> DbResult<Option<ShoppingList>> {
        let list = sqlx::query_as::<_, ShoppingList>(&format!(
            "{SELECT_LIST} WHERE title = ?1 AND store_name = ?2"
        ))
        .bind(title)
        .bind(store_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(list)
    }

    /// Inserts a new list and returns its id.
    ///
    /// ## Errors
    /// * `DbError::UniqueViolation` - the `(title, store_name)` pair is taken
    pub async fn insert(&self, title: &str, store_name: &str) -> DbResult<i64> {
        let now = Utc::now();

        debug!(title = %title, store_name = %store_name, "Inserting shopping list");

        let result = sqlx::query(
            r#"
            INSERT INTO shopping_list (title, store_name, created_time, updated_time)
            VALUES (?1, ?2, ?3, ?3)
            "#,
        )
        .bind(title)
        .bind(store_name)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Applies a partial update and bumps `updated_time`.
    ///
    /// Fields left as `None` keep their stored value.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no list with this id
    /// * `DbError::UniqueViolation` - the new pair collides with another list
    pub async fn update(&self, id: i64, update: &ListUpdate) -> DbResult<()> {
        let now = Utc::now();

        debug!(id, ?update, "Updating shopping list");

        let result = sqlx::query(
            r#"
            UPDATE shopping_list SET
                title = COALESCE(?2, title),
                store_name = COALESCE(?3, store_name),
                updated_time = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(update.title.as_deref())
        .bind(update.store_name.as_deref())
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("ShoppingList", id));
        }

        Ok(())
    }

    /// Deletes a list and all of its lines in one transaction.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no list with this id (nothing is deleted)
    pub async fn delete_with_items(&self, id: i64) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let lines = sqlx::query("DELETE FROM shopping_list_items WHERE shopping_list_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let list = sqlx::query("DELETE FROM shopping_list WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if list.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Err(DbError::not_found("ShoppingList", id));
        }

        tx.commit().await?;

        debug!(id, lines = lines.rows_affected(), "Deleted shopping list");
        Ok(())
    }

    /// Lists every shopping list.
    pub async fn list_all(&self) -> DbResult<Vec<ShoppingList>> {
        let lists = sqlx::query_as::<_, ShoppingList>(&format!("{SELECT_LIST} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(lists)
    }

    /// Lists whose title matches.
    pub async fn find_by_title(&self, matcher: &TextMatch) -> DbResult<Vec<ShoppingList>> {
        let sql = format!(
            "{SELECT_LIST} WHERE {} ORDER BY id",
            title_predicate("title", matcher)
        );

        let lists = sqlx::query_as::<_, ShoppingList>(&sql)
            .bind(matcher.needle())
            .fetch_all(&self.pool)
            .await?;

        debug!(needle = %matcher.needle(), count = lists.len(), "Matched lists by title");
        Ok(lists)
    }

    /// Gets the lists with the given ids, in id order.
    ///
    /// Unknown ids are skipped.
    pub async fn get_many(&self, ids: &[i64]) -> DbResult<Vec<ShoppingList>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = sorted_ids(ids);
        let mut lists = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(IN_LIST_CHUNK) {
            let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_LIST);
            query.push(" WHERE id IN (");
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(") ORDER BY id");

            let rows: Vec<ShoppingList> = query.build_query_as().fetch_all(&self.pool).await?;
            lists.extend(rows);
        }

        Ok(lists)
    }

    /// Counts shopping lists.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shopping_list")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> ShoppingListRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.shopping_lists()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = repo().await;

        let id = repo.insert("Grocery", "Amazon").await.unwrap();
        assert_eq!(id, 1);

        let list = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(list.title, "Grocery");
        assert_eq!(list.store_name, "Amazon");
        assert_eq!(list.created_time, list.updated_time);

        assert!(repo.get_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unique_index_rejects_duplicate_pair() {
        let repo = repo().await;

        repo.insert("Grocery", "Amazon").await.unwrap();
        let err = repo.insert("Grocery", "Amazon").await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));

        // Same title at a different store is a different list
        repo.insert("Grocery", "Walmart").await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_missing_fields() {
        let repo = repo().await;
        let id = repo.insert("Grocery", "Amazon").await.unwrap();
        let before = repo.get_by_id(id).await.unwrap().unwrap();

        let update = ListUpdate::new(None, Some("Amazon1".to_string()));
        repo.update(id, &update).await.unwrap();

        let after = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(after.title, "Grocery");
        assert_eq!(after.store_name, "Amazon1");
        assert_eq!(after.created_time, before.created_time);
        assert!(after.updated_time >= before.updated_time);
    }

    #[tokio::test]
    async fn test_update_missing_list() {
        let repo = repo().await;

        let update = ListUpdate::new(Some("Grocery".to_string()), None);
        let err = repo.update(42, &update).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_list() {
        let repo = repo().await;
        repo.insert("Grocery", "Amazon").await.unwrap();

        let err = repo.delete_with_items(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_title() {
        let repo = repo().await;
        repo.insert("Grocery", "Amazon").await.unwrap();
        repo.insert("Grocery New", "Amazon").await.unwrap();
        repo.insert("Custom", "Amazon").await.unwrap();

        let exact = repo
            .find_by_title(&TextMatch::Exact("Grocery".into()))
            .await
            .unwrap();
        assert_eq!(exact.len(), 1);

        let contains = repo
            .find_by_title(&TextMatch::Contains("Grocery".into()))
            .await
            .unwrap();
        let titles: Vec<_> = contains.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Grocery", "Grocery New"]);

        let lower = repo
            .find_by_title(&TextMatch::Contains("grocery".into()))
            .await
            .unwrap();
        assert!(lower.is_empty());
    }

    #[tokio::test]
    async fn test_get_many_orders_by_id() {
        let repo = repo().await;
        let a = repo.insert("A", "S").await.unwrap();
        let b = repo.insert("B", "S").await.unwrap();
        repo.insert("C", "S").await.unwrap();

        let lists = repo.get_many(&[b, a, 99]).await.unwrap();
        let ids: Vec<_> = lists.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![a, b]);

        assert!(repo.get_many(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_many_with_long_id_list() {
        let repo = repo().await;
        for n in 0..1200 {
            repo.insert(&format!("List {n}"), "Store").await.unwrap();
        }

        let mut ids: Vec<i64> = (1..=1200).rev().collect();
        ids.push(7);
        ids.push(5000);
        let lists = repo.get_many(&ids).await.unwrap();

        assert_eq!(lists.len(), 1200);
        assert_eq!(lists[0].id, 1);
        assert_eq!(lists[1199].id, 1200);
        assert!(lists.windows(2).all(|w| w[0].id < w[1].id));
    }
}
