//! Shopping list query handlers. All answer `200` with a JSON array of list
//! views, `[]` when nothing matches.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use crate::error::ApiResult;
use crate::AppState;
use shoplist_core::ListView;

pub async fn all_lists(State(state): State<AppState>) -> ApiResult<Json<Vec<ListView>>> {
    Ok(Json(state.db.search().get_all().await?))
}

pub async fn lists_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<Vec<ListView>>> {
    debug!(title = %title, "Lists by title");
    Ok(Json(state.db.search().get_by_title(&title).await?))
}

pub async fn search_lists_by_title(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> ApiResult<Json<Vec<ListView>>> {
    debug!(keyword = %keyword, "Search lists by title");
    Ok(Json(state.db.search().search_by_title_keyword(&keyword).await?))
}

/// A non-integer id is a route miss (404), not a bad request.
pub async fn lists_by_item_id(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<ListView>>> {
    let Path(item_id) = item_id?;
    debug!(item_id, "Lists by item id");
    Ok(Json(state.db.search().get_by_item_id(item_id).await?))
}

pub async fn search_lists_by_item_name(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> ApiResult<Json<Vec<ListView>>> {
    debug!(keyword = %keyword, "Search lists by item name");
    Ok(Json(state.db.search().search_by_item_name_keyword(&keyword).await?))
}
