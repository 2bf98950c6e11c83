//! # Catalog Repository
//!
//! Read access to the seeded `item` and `unit_measurement` tables.
//!
//! The API never writes catalog rows; see [`crate::seed`] for how they get
//! there.

use std::collections::HashMap;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::{title_predicate, IN_LIST_CHUNK};
use shoplist_core::{Item, TextMatch, UnitMeasurement};

/// Repository for catalog lookups.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = db.catalog();
///
/// let water = catalog.get_item(1).await?;
/// let ids = catalog.find_item_ids_by_title(&TextMatch::Contains("Rice".into())).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    /// Gets an item by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - No such item
    pub async fn get_item(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, price, discount_percentage, unit_measurement_id
            FROM item
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Lists every item ordered by id.
    pub async fn list_items(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, price, discount_percentage, unit_measurement_id
            FROM item
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Ids of items whose title matches.
    pub async fn find_item_ids_by_title(&self, matcher: &TextMatch) -> DbResult<Vec<i64>> {
        let sql = format!(
            "SELECT id FROM item WHERE {} ORDER BY id",
            title_predicate("title", matcher)
        );

        let ids: Vec<i64> = sqlx::query_scalar(&sql)
            .bind(matcher.needle())
            .fetch_all(&self.pool)
            .await?;

        debug!(needle = %matcher.needle(), count = ids.len(), "Matched items by title");
        Ok(ids)
    }

    /// Maps item id to title for the given ids.
    ///
    /// Unknown ids are simply absent from the map.
    pub async fn item_titles(&self, ids: &[i64]) -> DbResult<HashMap<i64, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut titles = HashMap::with_capacity(ids.len());
        for chunk in ids.chunks(IN_LIST_CHUNK) {
            let mut query: QueryBuilder<Sqlite> =
                QueryBuilder::new("SELECT id, title FROM item WHERE id IN (");
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let rows: Vec<(i64, String)> = query.build_query_as().fetch_all(&self.pool).await?;
            titles.extend(rows);
        }

        Ok(titles)
    }

    /// Lists every unit measurement ordered by id.
    pub async fn list_units(&self) -> DbResult<Vec<UnitMeasurement>> {
        let units =
            sqlx::query_as::<_, UnitMeasurement>("SELECT id, title FROM unit_measurement ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(units)
    }

    /// Counts catalog items.
    pub async fn count_items(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM item")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
