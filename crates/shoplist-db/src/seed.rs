//! # Catalog Seed
//!
//! Inserts the fixed unit measurements and items the API works against.
//! Clients never create catalog rows, so a fresh database is unusable until
//! this has run once.
//!
//! Rows carry explicit ids (items `1..=12`) so that clients and tests can
//! refer to them by number. Seeding is a no-op when the catalog already has
//! rows, which makes it safe to call on every startup.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

/// `(id, title)` of every unit measurement.
pub const UNITS: &[(i64, &str)] = &[(1, "EACH"), (2, "PACK")];

/// Item titles in id order, starting at id 1.
pub const ITEM_TITLES: &[&str] = &[
    "Water Bottle",
    "Rice 1 KG Bag",
    "Energy Drink",
    "Rice 2 KG Bag",
    "Soap",
    "Sugar 1 KG Bag",
    "Tooth Paste",
    "Ice Cream 1 Liter Pack",
    "Notebook",
    "Oranges 1 KG Bag",
    "Pen",
    "Apple 1 KG Bag",
];

/// One seeded item row: `(id, title, price, discount_percentage, unit_id)`.
pub type SeedItem = (i64, &'static str, f64, f64, i64);

/// Returns the seeded items.
///
/// Item `n` costs `100 * n` with an `n`% discount. Odd ids are sold `EACH`,
/// even ids by the `PACK`.
pub fn seed_items() -> Vec<SeedItem> {
    ITEM_TITLES
        .iter()
        .zip(1i64..)
        .map(|(title, id)| {
            let unit = if id % 2 == 1 { 1 } else { 2 };
            (id, *title, 100.0 * id as f64, id as f64, unit)
        })
        .collect()
}

/// Seeds units and items inside one transaction.
///
/// ## Returns
/// `true` if rows were inserted, `false` if the catalog was already present.
pub async fn seed_catalog(pool: &SqlitePool) -> DbResult<bool> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM item")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        debug!(existing, "Catalog already seeded");
        return Ok(false);
    }

    for (id, title) in UNITS {
        sqlx::query("INSERT OR IGNORE INTO unit_measurement (id, title) VALUES (?1, ?2)")
            .bind(id)
            .bind(title)
            .execute(&mut *tx)
            .await?;
    }

    let items = seed_items();
    for (id, title, price, discount, unit) in &items {
        sqlx::query(
            r#"
            INSERT INTO item (id, title, price, discount_percentage, unit_measurement_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(price)
        .bind(discount)
        .bind(unit)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(units = UNITS.len(), items = items.len(), "Catalog seeded");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[test]
    fn test_seed_items_follow_pattern() {
        let items = seed_items();
        assert_eq!(items.len(), 12);
        assert_eq!(items[0], (1, "Water Bottle", 100.0, 1.0, 1));
        assert_eq!(items[1], (2, "Rice 1 KG Bag", 200.0, 2.0, 2));
        assert_eq!(items[11], (12, "Apple 1 KG Bag", 1200.0, 12.0, 2));
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.seed_catalog().await.unwrap());
        assert!(!db.seed_catalog().await.unwrap());

        assert_eq!(db.catalog().count_items().await.unwrap(), 12);
        assert_eq!(db.catalog().list_units().await.unwrap().len(), 2);
    }
}
