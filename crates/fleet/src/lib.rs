//! Fleet Domain Library
//!
//! Core domain types and interfaces for the fleet management backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Company, Driver) with partial-update merging
//!   - `validation/`: Pure field validators (mandatory fields, formats, dates)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `stores/`: Document-store access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet::domain::{Company, Driver, NewCompany, DriverPatch};
//! use fleet::ports::{CompanyStore, DriverStore};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Company, CompanyPatch, DomainError, Driver, DriverPatch, NewCompany, NewDriver,
};
pub use ports::{
    CompanySearchFilter, CompanyStore, DriverSearchFilter, DriverStore, SearchPage,
};
