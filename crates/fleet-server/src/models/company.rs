//! Company HTTP Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use fleet::{Company, CompanyPatch, NewCompany, SearchPage};

/// Create Company request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    pub company_name: Option<String>,
    pub registration_number: Option<String>,
    pub established_on: Option<String>,
    pub website: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub primary_contact_first_name: Option<String>,
    pub primary_contact_last_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_mobile: Option<String>,
}

/// Update Company request - omitted or blank fields keep their stored value
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    pub company_name: Option<String>,
    pub registration_number: Option<String>,
    pub established_on: Option<String>,
    pub website: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub primary_contact_first_name: Option<String>,
    pub primary_contact_last_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_mobile: Option<String>,
}

/// Company response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: Option<Uuid>,
    pub company_name: String,
    pub registration_number: String,
    pub established_on: Option<String>,
    pub website: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub primary_contact_first_name: Option<String>,
    pub primary_contact_last_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_mobile: Option<String>,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    pub is_active: bool,
}

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchCompaniesParams {
    pub company_name: Option<String>,
    pub registration_number: Option<String>,
    /// Zero-based page index, defaults to 0
    pub page_index: Option<u32>,
    /// Page size, defaults to 10
    pub items_per_page: Option<u32>,
}

/// One page of companies
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPage {
    pub page_index: u32,
    pub items_per_page: u32,
    pub total_records: u64,
    pub companies: Vec<CompanyResponse>,
}

impl From<CreateCompanyRequest> for NewCompany {
    fn from(req: CreateCompanyRequest) -> Self {
        Self {
            company_name: req.company_name,
            registration_number: req.registration_number,
            established_on: req.established_on,
            website: req.website,
            address1: req.address1,
            address2: req.address2,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
            primary_contact_first_name: req.primary_contact_first_name,
            primary_contact_last_name: req.primary_contact_last_name,
            primary_contact_email: req.primary_contact_email,
            primary_contact_mobile: req.primary_contact_mobile,
        }
    }
}

impl From<UpdateCompanyRequest> for CompanyPatch {
    fn from(req: UpdateCompanyRequest) -> Self {
        Self {
            company_name: req.company_name,
            registration_number: req.registration_number,
            established_on: req.established_on,
            website: req.website,
            address1: req.address1,
            address2: req.address2,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
            primary_contact_first_name: req.primary_contact_first_name,
            primary_contact_last_name: req.primary_contact_last_name,
            primary_contact_email: req.primary_contact_email,
            primary_contact_mobile: req.primary_contact_mobile,
        }
    }
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            company_name: company.company_name,
            registration_number: company.registration_number,
            established_on: company.established_on,
            website: company.website,
            address1: company.address1,
            address2: company.address2,
            city: company.city,
            state: company.state,
            zip_code: company.zip_code,
            primary_contact_first_name: company.primary_contact_first_name,
            primary_contact_last_name: company.primary_contact_last_name,
            primary_contact_email: company.primary_contact_email,
            primary_contact_mobile: company.primary_contact_mobile,
            created_on: company.created_on,
            modified_on: company.modified_on,
            is_active: company.is_active,
        }
    }
}

impl From<SearchPage<Company>> for CompanyPage {
    fn from(page: SearchPage<Company>) -> Self {
        Self {
            page_index: page.page_index,
            items_per_page: page.items_per_page,
            total_records: page.total_records,
            companies: page.items.into_iter().map(Into::into).collect(),
        }
    }
}
