//! # List Item Repository
//!
//! Database operations for `shopping_list_items`, the aggregated
//! (list, item) lines.
//!
//! ## Adding Quantity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add_quantity(list, item, qty)                        │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  INSERT line (price + discount snapshot, quantity = qty)               │
//! │  ON CONFLICT (list, item) DO UPDATE quantity = quantity + qty          │
//! │    │   ← takes the write lock, concurrent adds queue here              │
//! │    ▼                                                                    │
//! │  SELECT line → recompute totals from the cumulative quantity           │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  UPDATE derived fields                                                  │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  COMMIT                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The snapshot columns are only written by the INSERT branch, so the price
//! a line was first added at never changes.
//!
//! Lines are returned in insertion order (`rowid`).

use std::collections::BTreeSet;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::{sorted_ids, IN_LIST_CHUNK};
use shoplist_core::{Item, ShoppingListItem};

const SELECT_LINE: &str = r#"
    SELECT
        shopping_list_id,
        item_id,
        quantity,
        actual_item_price,
        discount_percentage,
        discount_per_item,
        discounted_item_price,
        actual_total_price,
        discounted_total_price
    FROM shopping_list_items
"#;

/// Repository for list lines.
#[derive(Debug, Clone)]
pub struct ListItemRepository {
    pool: SqlitePool,
}

impl ListItemRepository {
    /// Creates a new ListItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ListItemRepository { pool }
    }

    /// Gets the line for a (list, item) pair.
    pub async fn get(&self, shopping_list_id: i64, item_id: i64) -> DbResult<Option<ShoppingListItem>> {
        let line = sqlx::query_as::<_, ShoppingListItem>(&format!(
            "{SELECT_LINE} WHERE shopping_list_id = ?1 AND item_id = ?2"
        ))
        .bind(shopping_list_id)
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(line)
    }

    /// Lines of one list.
    pub async fn list_for_list(&self, shopping_list_id: i64) -> DbResult<Vec<ShoppingListItem>> {
        let lines = sqlx::query_as::<_, ShoppingListItem>(&format!(
            "{SELECT_LINE} WHERE shopping_list_id = ?1 ORDER BY rowid"
        ))
        .bind(shopping_list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// Lines of several lists, grouped by list id.
    pub async fn list_for_lists(&self, shopping_list_ids: &[i64]) -> DbResult<Vec<ShoppingListItem>> {
        if shopping_list_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = sorted_ids(shopping_list_ids);
        let mut lines = Vec::new();
        for chunk in ids.chunks(IN_LIST_CHUNK) {
            let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_LINE);
            query.push(" WHERE shopping_list_id IN (");
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(") ORDER BY shopping_list_id, rowid");

            let rows: Vec<ShoppingListItem> = query.build_query_as().fetch_all(&self.pool).await?;
            lines.extend(rows);
        }

        Ok(lines)
    }

    /// Distinct ids of lists holding any of the given items, ascending.
    pub async fn list_ids_containing(&self, item_ids: &[i64]) -> DbResult<Vec<i64>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut list_ids = BTreeSet::new();
        for chunk in item_ids.chunks(IN_LIST_CHUNK) {
            let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
                "SELECT DISTINCT shopping_list_id FROM shopping_list_items WHERE item_id IN (",
            );
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let ids: Vec<i64> = query
                .build_query_scalar()
                .fetch_all(&self.pool)
                .await?;
            list_ids.extend(ids);
        }

        debug!(items = item_ids.len(), lists = list_ids.len(), "Resolved lists containing items");
        Ok(list_ids.into_iter().collect())
    }

    /// Adds `quantity` of `item` to a list, creating the line on first add.
    ///
    /// Returns the line as stored after the commit. The caller has already
    /// checked that the list and item exist; a list removed in between
    /// surfaces as `DbError::ForeignKeyViolation`.
    pub async fn add_quantity(
        &self,
        shopping_list_id: i64,
        item: &Item,
        quantity: i64,
    ) -> DbResult<ShoppingListItem> {
        let snapshot = ShoppingListItem::snapshot(shopping_list_id, item);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO shopping_list_items (
                shopping_list_id, item_id, quantity,
                actual_item_price, discount_percentage
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (shopping_list_id, item_id) DO UPDATE SET
                quantity = shopping_list_items.quantity + excluded.quantity
            "#,
        )
        .bind(snapshot.shopping_list_id)
        .bind(snapshot.item_id)
        .bind(quantity)
        .bind(snapshot.actual_item_price)
        .bind(snapshot.discount_percentage)
        .execute(&mut *tx)
        .await?;

        let mut line = sqlx::query_as::<_, ShoppingListItem>(&format!(
            "{SELECT_LINE} WHERE shopping_list_id = ?1 AND item_id = ?2"
        ))
        .bind(shopping_list_id)
        .bind(item.id)
        .fetch_one(&mut *tx)
        .await?;

        line.recompute();
        let totals = line.totals();

        sqlx::query(
            r#"
            UPDATE shopping_list_items SET
                discount_per_item = ?3,
                discounted_item_price = ?4,
                actual_total_price = ?5,
                discounted_total_price = ?6
            WHERE shopping_list_id = ?1 AND item_id = ?2
            "#,
        )
        .bind(shopping_list_id)
        .bind(item.id)
        .bind(totals.discount_per_item)
        .bind(totals.discounted_item_price)
        .bind(totals.actual_total_price)
        .bind(totals.discounted_total_price)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            shopping_list_id,
            item_id = item.id,
            added = quantity,
            quantity = line.quantity,
            "Added item to list"
        );

        Ok(line)
    }

    /// Counts the lines of one list.
    pub async fn count_for_list(&self, shopping_list_id: i64) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM shopping_list_items WHERE shopping_list_id = ?1")
                .bind(shopping_list_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
