//! Shopping list write handlers.
//!
//! Bodies are taken as `Result<Json<T>, JsonRejection>` so that malformed
//! JSON, missing required fields and wrong types all answer 400 in the
//! common `{code, message}` shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::AppState;
use shoplist_core::{ListUpdate, ListView};

/// `POST /shoppingList` body.
///
/// Both fields are optional at the JSON level so a missing field gets the
/// same "is not provided" message as an empty one.
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub title: Option<String>,
    pub store: Option<String>,
}

/// `PUT /shoppingList` body.
#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    pub id: i64,
    pub title: Option<String>,
    pub store: Option<String>,
}

/// `DELETE /shoppingList` body.
#[derive(Debug, Deserialize)]
pub struct DeleteListRequest {
    pub id: i64,
}

/// `PUT /shoppingListItem` body.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub shopping_list_id: i64,
    pub item_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct ListIdResponse {
    pub shopping_list_id: i64,
}

pub async fn create_list(
    State(state): State<AppState>,
    payload: Result<Json<CreateListRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ListIdResponse>)> {
    let Json(request) = payload?;
    debug!(?request, "Create shopping list");

    let title = request.title.unwrap_or_default();
    let store = request.store.unwrap_or_default();
    let id = state.db.list_store().create_list(&title, &store).await?;

    Ok((StatusCode::CREATED, Json(ListIdResponse { shopping_list_id: id })))
}

pub async fn update_list(
    State(state): State<AppState>,
    payload: Result<Json<UpdateListRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ListIdResponse>)> {
    let Json(request) = payload?;
    debug!(?request, "Update shopping list");

    let update = ListUpdate::new(request.title, request.store);
    let id = state.db.list_store().update_list(request.id, update).await?;

    Ok((StatusCode::CREATED, Json(ListIdResponse { shopping_list_id: id })))
}

pub async fn delete_list(
    State(state): State<AppState>,
    payload: Result<Json<DeleteListRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload?;
    debug!(id = request.id, "Delete shopping list");

    state.db.list_store().delete_list(request.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_item(
    State(state): State<AppState>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ListView>)> {
    let Json(request) = payload?;
    debug!(?request, "Add item to shopping list");

    let view = state
        .db
        .list_store()
        .add_item(request.shopping_list_id, request.item_id, request.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(view)))
}
