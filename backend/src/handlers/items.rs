use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult, NAME_REQUIRED},
    extract::{ItemId, Payload},
    models::{CreateItem, Envelope, Item, UpdateItem},
    AppState,
};

type ItemResponse<T> = AppResult<(StatusCode, Json<Envelope<T>>)>;

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> ItemResponse<Vec<Item>> {
    let items = state.items.read().await.list().to_vec();

    debug!(count = items.len(), "Listed items");

    Ok((StatusCode::OK, Json(Envelope::ok(items))))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> ItemResponse<Item> {
    let id = id.ok_or_else(AppError::item_not_found)?;
    let item = state.items.read().await.get(id)?;

    debug!(id, "Fetched item");

    Ok((StatusCode::OK, Json(Envelope::ok(item))))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateItem>,
) -> ItemResponse<Item> {
    let new = payload
        .into_new_item()
        .ok_or_else(|| AppError::BadRequest(NAME_REQUIRED.to_string()))?;

    // id assignment and append happen under one write guard
    let item = state.items.write().await.insert(new);

    info!(id = item.id, name = %item.name, "Created item");

    Ok((StatusCode::CREATED, Json(Envelope::ok(item))))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    Payload(payload): Payload<UpdateItem>,
) -> ItemResponse<Item> {
    let id = id.ok_or_else(AppError::item_not_found)?;
    let item = state.items.write().await.update(id, &payload)?;

    info!(id, name = %item.name, "Updated item");

    Ok((StatusCode::OK, Json(Envelope::ok(item))))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> ItemResponse<Item> {
    let id = id.ok_or_else(AppError::item_not_found)?;
    let item = state.items.write().await.remove(id)?;

    info!(id, name = %item.name, "Deleted item");

    Ok((
        StatusCode::OK,
        Json(Envelope::ok(item).with_message("Item deleted")),
    ))
}
