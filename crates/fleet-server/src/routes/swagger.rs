//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CompanyPage, CompanyResponse, CreateCompanyRequest, CreateDriverRequest, DriverPage,
    DriverResponse, UpdateCompanyRequest, UpdateDriverRequest,
};

use super::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Company endpoints
        super::company::create_company,
        super::company::update_company,
        super::company::get_company,
        super::company::search_companies,
        super::company::delete_company,
        // Driver endpoints
        super::driver::create_driver,
        super::driver::update_driver,
        super::driver::get_driver,
        super::driver::search_drivers,
        super::driver::delete_driver,
    ),
    info(
        title = "Fleet API",
        version = "0.1.0",
        description = "Fleet management backend: companies and drivers with soft deletion and paginated search.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Company", description = "Company management - unique by registration number"),
        (name = "Driver", description = "Driver management - unique by license number"),
    ),
    components(
        schemas(
            // Company
            CreateCompanyRequest,
            UpdateCompanyRequest,
            CompanyResponse,
            CompanyPage,
            // Driver
            CreateDriverRequest,
            UpdateDriverRequest,
            DriverResponse,
            DriverPage,
            // Errors
            ErrorResponse,
        )
    )
)]
pub struct ApiDoc;
