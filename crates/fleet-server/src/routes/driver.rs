//! Driver Routes
//!
//! HTTP handlers that delegate to DriverService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use fleet::DriverSearchFilter;

use crate::models::{
    CreateDriverRequest, DriverPage, DriverResponse, SearchDriversParams, UpdateDriverRequest,
};
use crate::routes::ApiError;
use crate::AppState;

const DEFAULT_PAGE_INDEX: u32 = 0;
const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Create driver
#[utoipa::path(
    post,
    path = "/drivers",
    request_body = CreateDriverRequest,
    responses(
        (status = 201, description = "Driver created", body = DriverResponse),
        (status = 400, description = "Validation failure or duplicate license number", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Driver"
)]
pub async fn create_driver(
    State(state): State<AppState>,
    Json(payload): Json<CreateDriverRequest>,
) -> Result<(StatusCode, Json<DriverResponse>), ApiError> {
    tracing::info!(email = ?payload.email, "create driver requested");

    let saved = state.driver_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// Update driver
#[utoipa::path(
    put,
    path = "/drivers/{id}",
    params(("id" = Uuid, Path, description = "Driver ID")),
    request_body = UpdateDriverRequest,
    responses(
        (status = 200, description = "Driver updated", body = DriverResponse),
        (status = 400, description = "Validation failure or duplicate license number", body = super::ErrorResponse),
        (status = 404, description = "No active driver for this id", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Driver"
)]
pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDriverRequest>,
) -> Result<Json<DriverResponse>, ApiError> {
    let updated = state.driver_service.update(id, payload.into()).await?;

    Ok(Json(updated.into()))
}

/// Get driver by ID
#[utoipa::path(
    get,
    path = "/drivers/{id}",
    params(("id" = Uuid, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Driver found", body = DriverResponse),
        (status = 404, description = "No active driver for this id", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Driver"
)]
pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DriverResponse>, ApiError> {
    let driver = state.driver_service.get_by_id(id).await?;

    Ok(Json(driver.into()))
}

/// Search drivers
#[utoipa::path(
    get,
    path = "/drivers",
    params(SearchDriversParams),
    responses(
        (status = 200, description = "One page of matching active drivers", body = DriverPage),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Driver"
)]
pub async fn search_drivers(
    State(state): State<AppState>,
    Query(params): Query<SearchDriversParams>,
) -> Result<Json<DriverPage>, ApiError> {
    let filter = DriverSearchFilter {
        first_name: params.first_name,
        last_name: params.last_name,
        license_number: params.license_number,
    };

    let page = state
        .driver_service
        .search(
            filter,
            params.page_index.unwrap_or(DEFAULT_PAGE_INDEX),
            params.items_per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        )
        .await?;

    Ok(Json(page.into()))
}

/// Delete driver (soft delete)
#[utoipa::path(
    delete,
    path = "/drivers/{id}",
    params(("id" = Uuid, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Driver soft deleted"),
        (status = 404, description = "No active driver for this id", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Driver"
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.driver_service.delete(id).await?;

    Ok(Json(serde_json::json!({
        "message": "Driver deleted successfully"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drivers", get(search_drivers).post(create_driver))
        .route(
            "/drivers/:id",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
}
