//! Address endpoint handlers.
//!
//! Batch routes pass `FlagMaintenance::Defer`: the bulk API contract does not
//! re-derive the only-one-address flag. Callers needing the invariant restored
//! use the service layer's `Recompute` path.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::error::AppError;
use crate::models::{AddressBatch, AddressCreateItem, AddressInput, AddressUpdateItem, CreatedId};
use crate::response;
use crate::service::{AddressService, FlagMaintenance};
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
    Json(input): Json<AddressInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = AddressService::create(&state.pool, customer_id, &input).await?;
    Ok(response::success(
        CreatedId { id },
        "Address created successfully",
    ))
}

pub async fn list(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = AddressService::list(&state.pool, customer_id).await?;
    Ok(response::success(rows, "Success"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(address_id): Path<i64>,
    Json(input): Json<AddressInput>,
) -> Result<impl IntoResponse, AppError> {
    AddressService::update(&state.pool, address_id, &input).await?;
    Ok(response::success_empty("Address updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(address_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    AddressService::delete(&state.pool, address_id).await?;
    Ok(response::success_empty("Address deleted successfully"))
}

pub async fn update_many(
    State(state): State<AppState>,
    Json(batch): Json<AddressBatch<AddressUpdateItem>>,
) -> Result<impl IntoResponse, AppError> {
    AddressService::update_many(&state.pool, &batch.addresses, FlagMaintenance::Defer).await?;
    Ok(response::success_empty("Addresses updated successfully"))
}

pub async fn create_many(
    State(state): State<AppState>,
    Json(batch): Json<AddressBatch<AddressCreateItem>>,
) -> Result<impl IntoResponse, AppError> {
    AddressService::create_many(&state.pool, &batch.addresses, FlagMaintenance::Defer).await?;
    Ok(response::success_empty("Addresses added successfully"))
}
