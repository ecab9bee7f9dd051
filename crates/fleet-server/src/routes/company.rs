//! Company Routes
//!
//! HTTP handlers that delegate to CompanyService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use fleet::CompanySearchFilter;

use crate::models::{
    CompanyPage, CompanyResponse, CreateCompanyRequest, SearchCompaniesParams,
    UpdateCompanyRequest,
};
use crate::routes::ApiError;
use crate::AppState;

const DEFAULT_PAGE_INDEX: u32 = 0;
const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Create company
#[utoipa::path(
    post,
    path = "/companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanyResponse),
        (status = 400, description = "Validation failure or duplicate registration number", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Company"
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    tracing::info!(company_name = ?payload.company_name, "create company requested");

    let saved = state.company_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// Update company
#[utoipa::path(
    put,
    path = "/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 400, description = "Validation failure or duplicate registration number", body = super::ErrorResponse),
        (status = 404, description = "No active company for this id", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Company"
)]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let updated = state.company_service.update(id, payload.into()).await?;

    Ok(Json(updated.into()))
}

/// Get company by ID
#[utoipa::path(
    get,
    path = "/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company found", body = CompanyResponse),
        (status = 404, description = "No active company for this id", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Company"
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let company = state.company_service.get_by_id(id).await?;

    Ok(Json(company.into()))
}

/// Search companies
#[utoipa::path(
    get,
    path = "/companies",
    params(SearchCompaniesParams),
    responses(
        (status = 200, description = "One page of matching active companies", body = CompanyPage),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Company"
)]
pub async fn search_companies(
    State(state): State<AppState>,
    Query(params): Query<SearchCompaniesParams>,
) -> Result<Json<CompanyPage>, ApiError> {
    let filter = CompanySearchFilter {
        company_name: params.company_name,
        registration_number: params.registration_number,
    };

    let page = state
        .company_service
        .search(
            filter,
            params.page_index.unwrap_or(DEFAULT_PAGE_INDEX),
            params.items_per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        )
        .await?;

    Ok(Json(page.into()))
}

/// Delete company (soft delete)
#[utoipa::path(
    delete,
    path = "/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company soft deleted"),
        (status = 404, description = "No active company for this id", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse)
    ),
    tag = "Company"
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.company_service.delete(id).await?;

    Ok(Json(serde_json::json!({
        "message": "Company deleted successfully"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/companies", get(search_companies).post(create_company))
        .route(
            "/companies/:id",
            get(get_company).put(update_company).delete(delete_company),
        )
}
