//! # Repository Module
//!
//! Database repository implementations for Shoplist.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Service (ListStore / ListViews / ListSearch)                          │
//! │       │                                                                 │
//! │       │  db.shopping_lists().find_by_title(&TextMatch::Contains(..))   │
//! │       ▼                                                                 │
//! │  ShoppingListRepository                                                │
//! │  ├── get_by_id / find_by_title_and_store                               │
//! │  ├── insert / update / delete_with_items                               │
//! │  └── list_all / find_by_title / get_many                               │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CatalogRepository`](catalog::CatalogRepository) - Items and units (read only)
//! - [`ShoppingListRepository`](shopping_list::ShoppingListRepository) - List rows
//! - [`ListItemRepository`](list_item::ListItemRepository) - List lines and the upsert

use shoplist_core::TextMatch;

pub mod catalog;
pub mod list_item;
pub mod shopping_list;

/// Most ids bound into a single `IN (...)` list. SQLite refuses statements
/// with more host parameters than `SQLITE_MAX_VARIABLE_NUMBER` (999 before
/// 3.32), so longer id lists are queried chunk by chunk.
pub(crate) const IN_LIST_CHUNK: usize = 500;

/// Sorted, de-duplicated copy of `ids`. Chunking a sorted list keeps results
/// that are ordered by id ordered across chunks.
pub(crate) fn sorted_ids(ids: &[i64]) -> Vec<i64> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Column predicate for a [`TextMatch`], binding the needle as `?1`.
///
/// SQLite `LIKE` ignores ASCII case, so substring search goes through
/// `instr`, which compares bytes.
pub(crate) fn title_predicate(column: &str, matcher: &TextMatch) -> String {
    match matcher {
        TextMatch::Exact(_) => format!("{column} = ?1"),
        TextMatch::Contains(_) => format!("instr({column}, ?1) > 0"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_predicate() {
        assert_eq!(
            title_predicate("title", &TextMatch::Exact("Grocery".into())),
            "title = ?1"
        );
        assert_eq!(
            title_predicate("title", &TextMatch::Contains("Groc".into())),
            "instr(title, ?1) > 0"
        );
    }

    #[test]
    fn test_sorted_ids() {
        assert_eq!(sorted_ids(&[5, 1, 3, 1, 5]), vec![1, 3, 5]);
        assert!(sorted_ids(&[]).is_empty());
    }
}
