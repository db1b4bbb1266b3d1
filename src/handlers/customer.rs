//! Customer endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{CreatedId, CustomerInput, CustomerSummary};
use crate::pagination::{PageMeta, PageParams};
use crate::response;
use crate::service::CustomerService;
use crate::sql::{CustomerFilter, SortColumn, SortOrder};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CustomerListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

#[derive(Serialize)]
pub struct CustomerPage {
    pub data: Vec<CustomerSummary>,
    pub meta: PageMeta,
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CustomerInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = CustomerService::create(&state.pool, &input).await?;
    Ok(response::success(
        CreatedId { id },
        "Customer created successfully",
    ))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CustomerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let sort = SortColumn::parse(params.sort_by.as_deref())?;
    let order = SortOrder::parse(params.order.as_deref())?;
    let page = PageParams::new(params.page, params.limit);
    let filter = CustomerFilter {
        city: params.city,
        state: params.state,
        pin_code: params.pin_code,
        search: params.search,
    };
    let (rows, meta) = CustomerService::list(&state.pool, &filter, sort, order, page).await?;
    Ok(response::success(
        CustomerPage { data: rows, meta },
        "Success",
    ))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let detail = CustomerService::get(&state.pool, id).await?;
    Ok(response::success(detail, "Success"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<CustomerInput>,
) -> Result<impl IntoResponse, AppError> {
    CustomerService::update(&state.pool, id, &input).await?;
    Ok(response::success_empty("Customer updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    CustomerService::delete(&state.pool, id).await?;
    Ok(response::success_empty("Customer deleted successfully"))
}
