use crate::{
    dto::{CreateItemRequest, ItemDetails, ItemListQuery, ItemResponse, UpdateItemRequest},
    entities::Item,
    errors::ApiError,
    handlers::common::{
        map_json_rejection, no_content_response, not_found_response, success_response,
    },
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Json, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Creates the router for item endpoints
pub fn items_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

fn item_location(id: Uuid) -> String {
    format!("/items/{}", id)
}

/// List items, optionally filtered by name
#[utoipa::path(
    get,
    path = "/items",
    params(ItemListQuery),
    responses(
        (status = 200, description = "Items retrieved", body = [ItemResponse]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let query = ItemListQuery::from_pairs(params);
    let items: Vec<ItemResponse> = state
        .items
        .list(query.name)
        .await?
        .into_iter()
        .map(ItemResponse::from)
        .collect();

    info!(
        retrieved_at = %Utc::now().format("%H:%M:%S"),
        count = items.len(),
        "Retrieved {} items",
        items.len()
    );

    Ok(success_response(items))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item retrieved", body = ItemResponse),
        (status = 404, description = "Item not found")
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    match state.items.get(id).await? {
        Some(item) => Ok(success_response(ItemResponse::from(item))),
        None => Ok(not_found_response()),
    }
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse,
            headers(("Location" = String, description = "URL of the created item"))),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(map_json_rejection)?;
    let ItemDetails {
        name,
        description,
        price,
    } = payload.into_details()?;

    let item = Item::new(name, description, price);
    state.items.create(item.clone()).await?;
    info!(item_id = %item.id, "Created item");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, item_location(item.id))],
        Json(ItemResponse::from(item)),
    )
        .into_response())
}

/// Update an item's name, description and price
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Item not found")
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(map_json_rejection)?;
    let ItemDetails {
        name,
        description,
        price,
    } = payload.into_details()?;

    // Existence check and write are separate calls; a concurrent delete in
    // between turns the write into a no-op.
    let Some(existing) = state.items.get(id).await? else {
        return Ok(not_found_response());
    };

    state
        .items
        .update(existing.with_details(name, description, price))
        .await?;

    Ok(no_content_response())
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found")
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    if state.items.get(id).await?.is_none() {
        return Ok(not_found_response());
    }

    state.items.delete(id).await?;

    Ok(no_content_response())
}
