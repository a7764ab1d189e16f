// ABOUTME: HTTP request handlers for todo item operations
// ABOUTME: Handles CRUD operations for items with database integration

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::db::DbState;
use crate::error::{ApiResult, AppError};
use tasklist_items::{Item, ItemCreateInput, ItemUpdateInput};

/// Path ids that are not integers name no item
fn parse_item_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| AppError::not_found())
}

/// Decode a request body that must be a JSON object.
///
/// Derived `Deserialize` would also take an array as positional fields, so the
/// object shape is checked before the fields are read.
fn parse_object_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, String> {
    match serde_json::from_slice::<Value>(body).map_err(|e| e.to_string())? {
        object @ Value::Object(_) => serde_json::from_value(object).map_err(|e| e.to_string()),
        _ => Err("expected a JSON object".to_string()),
    }
}

/// List all items, lowest rank first
pub async fn list_items(State(db): State<DbState>) -> ApiResult<Json<Vec<Item>>> {
    info!("Listing items");

    let items = db.item_storage.list_items().await?;
    Ok(Json(items))
}

/// Get a single item by ID
pub async fn get_item(
    State(db): State<DbState>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<Item>> {
    info!("Getting item: {}", item_id);

    let item_id = parse_item_id(&item_id)?;
    let item = db.item_storage.get_item(item_id).await?;
    Ok(Json(item))
}

/// Request body for creating an item
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    /// Required; without it nothing is stored
    pub task: Option<String>,
    /// Requested rank; appends when absent
    pub order: Option<i64>,
    /// Defaults to `false`
    pub is_done: Option<bool>,
}

/// Response for create: `{"id": n}`, or `{}` when nothing was stored
#[derive(Debug, Serialize)]
pub struct CreatedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Create a new item.
///
/// A body without `task`, or one that does not parse, stores nothing and
/// answers `{}` with 200.
pub async fn create_item(State(db): State<DbState>, body: Bytes) -> ApiResult<Json<CreatedItem>> {
    let request = match parse_object_body::<CreateItemRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Malformed create body treated as missing task: {}", e);
            CreateItemRequest::default()
        }
    };

    let Some(task) = request.task else {
        info!("Create request without task, nothing stored");
        return Ok(Json(CreatedItem { id: None }));
    };

    info!("Creating item '{}' (order: {:?})", task, request.order);

    let input = ItemCreateInput {
        task,
        order: request.order,
        is_done: request.is_done,
    };

    let item = db.item_storage.create_item(input).await?;
    Ok(Json(CreatedItem { id: Some(item.id) }))
}

/// Request body for updating an item; absent fields stay unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    pub task: Option<String>,
    pub order: Option<i64>,
    pub is_done: Option<bool>,
}

/// Update an existing item
pub async fn update_item(
    State(db): State<DbState>,
    Path(item_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Item>> {
    info!("Updating item: {}", item_id);

    let item_id = parse_item_id(&item_id)?;
    let request: UpdateItemRequest = parse_object_body(&body)
        .map_err(|e| AppError::validation(format!("Invalid JSON body: {}", e)))?;

    let input = ItemUpdateInput {
        task: request.task,
        order: request.order,
        is_done: request.is_done,
    };

    let item = db.item_storage.update_item(item_id, input).await?;
    Ok(Json(item))
}

/// Delete an item; answers JSON `null`
pub async fn delete_item(
    State(db): State<DbState>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    info!("Deleting item: {}", item_id);

    let item_id = parse_item_id(&item_id)?;
    db.item_storage.delete_item(item_id).await?;
    Ok(Json(serde_json::Value::Null))
}
