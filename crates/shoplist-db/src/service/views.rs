//! # List Views
//!
//! Loads lines and item titles for lists and shapes them into
//! [`ListView`]s. Several lists are resolved with one query for lines and
//! one for titles, not one pair per list.

use std::collections::HashMap;

use tracing::debug;

use crate::pool::Database;
use crate::service::ServiceResult;
use shoplist_core::{build_list_view, ListView, ShoppingList, ShoppingListItem};

/// Builds list views from storage.
#[derive(Debug, Clone)]
pub struct ListViews {
    db: Database,
}

impl ListViews {
    pub fn new(db: Database) -> Self {
        ListViews { db }
    }

    /// View of one list with its lines in insertion order.
    pub async fn build_list_view(&self, list: &ShoppingList) -> ServiceResult<ListView> {
        let lines = self.db.list_items().list_for_list(list.id).await?;
        let titles = self.titles_for(&lines).await?;

        Ok(build_list_view(list, &lines, &titles))
    }

    /// Views of several lists, in the order given.
    pub async fn build_list_views(&self, lists: &[ShoppingList]) -> ServiceResult<Vec<ListView>> {
        if lists.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = lists.iter().map(|list| list.id).collect();
        let lines = self.db.list_items().list_for_lists(&ids).await?;
        let titles = self.titles_for(&lines).await?;

        let mut by_list: HashMap<i64, Vec<ShoppingListItem>> = HashMap::new();
        for line in lines {
            by_list.entry(line.shopping_list_id).or_default().push(line);
        }

        debug!(lists = lists.len(), "Building list views");

        Ok(lists
            .iter()
            .map(|list| {
                let lines = by_list.get(&list.id).map(Vec::as_slice).unwrap_or_default();
                build_list_view(list, lines, &titles)
            })
            .collect())
    }

    async fn titles_for(&self, lines: &[ShoppingListItem]) -> ServiceResult<HashMap<i64, String>> {
        let mut item_ids: Vec<i64> = lines.iter().map(|line| line.item_id).collect();
        item_ids.sort_unstable();
        item_ids.dedup();

        Ok(self.db.catalog().item_titles(&item_ids).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbConfig;

    #[tokio::test]
    async fn test_build_list_view_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.seed_catalog().await.unwrap();
        let id = db.list_store().create_list("Grocery", "Amazon").await.unwrap();
        db.list_store().add_item(id, 3, 2).await.unwrap();
        let list = db.list_store().require_list(id).await.unwrap();

        let first = db.views().build_list_view(&list).await.unwrap();
        let second = db.views().build_list_view(&list).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.items[0].item_title, "Energy Drink");
    }

    #[tokio::test]
    async fn test_build_list_views_preserves_input_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.seed_catalog().await.unwrap();
        let store = db.list_store();
        let a = store.create_list("A", "S").await.unwrap();
        let b = store.create_list("B", "S").await.unwrap();
        store.add_item(a, 1, 1).await.unwrap();
        store.add_item(b, 2, 2).await.unwrap();
        store.add_item(a, 5, 1).await.unwrap();

        let lists = vec![
            store.require_list(b).await.unwrap(),
            store.require_list(a).await.unwrap(),
        ];
        let views = db.views().build_list_views(&lists).await.unwrap();

        assert_eq!(views[0].shopping_list_title, "B");
        assert_eq!(views[0].items.len(), 1);
        assert_eq!(views[0].items[0].item_title, "Rice 1 KG Bag");
        assert_eq!(views[1].shopping_list_title, "A");
        let titles: Vec<_> = views[1].items.iter().map(|i| i.item_title.as_str()).collect();
        assert_eq!(titles, vec!["Water Bottle", "Soap"]);
    }

    #[tokio::test]
    async fn test_list_without_lines_has_empty_items() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let id = db.list_store().create_list("Grocery", "Amazon").await.unwrap();
        let list = db.list_store().require_list(id).await.unwrap();

        let views = db.views().build_list_views(&[list]).await.unwrap();
        assert_eq!(views.len(), 1);
        assert!(views[0].items.is_empty());
    }
}
