//! Driver HTTP Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use fleet::{Driver, DriverPatch, NewDriver, SearchPage};

/// Create Driver request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub date_of_birth: Option<String>,
    pub license_number: Option<String>,
    pub experience_years: Option<i32>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Update Driver request - omitted or blank fields keep their stored value
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub date_of_birth: Option<String>,
    pub license_number: Option<String>,
    pub experience_years: Option<i32>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Driver response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub date_of_birth: String,
    pub license_number: String,
    pub experience_years: Option<i32>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    pub is_active: bool,
}

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchDriversParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub license_number: Option<String>,
    /// Zero-based page index, defaults to 0
    pub page_index: Option<u32>,
    /// Page size, defaults to 10
    pub items_per_page: Option<u32>,
}

/// One page of drivers
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverPage {
    pub page_index: u32,
    pub items_per_page: u32,
    pub total_records: u64,
    pub drivers: Vec<DriverResponse>,
}

impl From<CreateDriverRequest> for NewDriver {
    fn from(req: CreateDriverRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            mobile: req.mobile,
            date_of_birth: req.date_of_birth,
            license_number: req.license_number,
            experience_years: req.experience_years,
            address1: req.address1,
            address2: req.address2,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
        }
    }
}

impl From<UpdateDriverRequest> for DriverPatch {
    fn from(req: UpdateDriverRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            mobile: req.mobile,
            date_of_birth: req.date_of_birth,
            license_number: req.license_number,
            experience_years: req.experience_years,
            address1: req.address1,
            address2: req.address2,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
        }
    }
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            email: driver.email,
            mobile: driver.mobile,
            date_of_birth: driver.date_of_birth,
            license_number: driver.license_number,
            experience_years: driver.experience_years,
            address1: driver.address1,
            address2: driver.address2,
            city: driver.city,
            state: driver.state,
            zip_code: driver.zip_code,
            created_on: driver.created_on,
            modified_on: driver.modified_on,
            is_active: driver.is_active,
        }
    }
}

impl From<SearchPage<Driver>> for DriverPage {
    fn from(page: SearchPage<Driver>) -> Self {
        Self {
            page_index: page.page_index,
            items_per_page: page.items_per_page,
            total_records: page.total_records,
            drivers: page.items.into_iter().map(Into::into).collect(),
        }
    }
}
