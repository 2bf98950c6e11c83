//! # List Search
//!
//! Read-only list queries. Every query returns `Vec<ListView>` in list id
//! order, empty when nothing matches.
//!
//! ## Item Queries
//! ```text
//! item id / item title keyword
//!       │
//!       ▼
//! matching item ids ──► lines holding them ──► distinct list ids ──► lists
//! ```

use tracing::debug;

use crate::pool::Database;
use crate::service::ServiceResult;
use shoplist_core::{ListView, ShoppingList, TextMatch};

/// Shopping list query service.
#[derive(Debug, Clone)]
pub struct ListSearch {
    db: Database,
}

impl ListSearch {
    pub fn new(db: Database) -> Self {
        ListSearch { db }
    }

    /// Every list.
    pub async fn get_all(&self) -> ServiceResult<Vec<ListView>> {
        let lists = self.db.shopping_lists().list_all().await?;
        self.views(lists).await
    }

    /// Lists whose title equals `title`.
    pub async fn get_by_title(&self, title: &str) -> ServiceResult<Vec<ListView>> {
        self.by_title(TextMatch::Exact(title.to_string())).await
    }

    /// Lists whose title contains `keyword` (case-sensitive).
    pub async fn search_by_title_keyword(&self, keyword: &str) -> ServiceResult<Vec<ListView>> {
        self.by_title(TextMatch::Contains(keyword.to_string())).await
    }

    /// Lists holding the item with this id.
    pub async fn get_by_item_id(&self, item_id: i64) -> ServiceResult<Vec<ListView>> {
        self.containing(&[item_id]).await
    }

    /// Lists holding any item whose title contains `keyword` (case-sensitive).
    pub async fn search_by_item_name_keyword(&self, keyword: &str) -> ServiceResult<Vec<ListView>> {
        let item_ids = self
            .db
            .catalog()
            .find_item_ids_by_title(&TextMatch::Contains(keyword.to_string()))
            .await?;

        self.containing(&item_ids).await
    }

    async fn by_title(&self, matcher: TextMatch) -> ServiceResult<Vec<ListView>> {
        let lists = self.db.shopping_lists().find_by_title(&matcher).await?;
        self.views(lists).await
    }

    async fn containing(&self, item_ids: &[i64]) -> ServiceResult<Vec<ListView>> {
        let list_ids = self.db.list_items().list_ids_containing(item_ids).await?;
        let lists = self.db.shopping_lists().get_many(&list_ids).await?;
        self.views(lists).await
    }

    async fn views(&self, lists: Vec<ShoppingList>) -> ServiceResult<Vec<ListView>> {
        debug!(count = lists.len(), "Lists matched");
        self.db.views().build_list_views(&lists).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
