//! # Routes
//!
//! ```text
//! POST   /api/v1/shoppingList                           create list
//! PUT    /api/v1/shoppingList                           update list
//! DELETE /api/v1/shoppingList                           delete list
//! PUT    /api/v1/shoppingListItem                       add item to list
//! GET    /api/v1/allShoppingList                        all lists
//! GET    /api/v1/shoppingListByTitle/{title}            exact title
//! GET    /api/v1/searchShoppingListsByTitle/{title}     title keyword
//! GET    /api/v1/shoppingListByItemId/{item_id}         lists holding item
//! GET    /api/v1/searchShoppingListByItemName/{title}   item title keyword
//! GET    /health                                        database reachable
//! ```

mod search;
mod shopping_list;

use axum::extract::State;
use axum::http::Uri;
use axum::routing::{get, put};
use axum::Router;

use crate::error::{ApiError, ErrorCode};
use crate::AppState;

/// Routes mounted under [`crate::API_PREFIX`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shoppingList",
            put(shopping_list::update_list)
                .post(shopping_list::create_list)
                .delete(shopping_list::delete_list),
        )
        .route("/shoppingListItem", put(shopping_list::add_item))
        .route("/allShoppingList", get(search::all_lists))
        .route("/shoppingListByTitle/{title}", get(search::lists_by_title))
        .route(
            "/searchShoppingListsByTitle/{title}",
            get(search::search_lists_by_title),
        )
        .route("/shoppingListByItemId/{item_id}", get(search::lists_by_item_id))
        .route(
            "/searchShoppingListByItemName/{title}",
            get(search::search_lists_by_item_name),
        )
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    if state.db.health_check().await {
        Ok("OK")
    } else {
        Err(ApiError::new(ErrorCode::Unavailable, "Database unavailable"))
    }
}

/// Any unmatched route.
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
