//! Application Services (Use Cases)
//!
//! Orchestration of the validate -> uniqueness-check -> persist and
//! fetch -> merge -> persist pipelines, generic over the store ports.

mod company_service;
mod driver_service;

pub use company_service::CompanyService;
pub use driver_service::DriverService;

#[cfg(test)]
pub mod testing;
