//! PostgreSQL Store Adapters
//!
//! Whole-document row mapping per entity. Soft-deleted rows stay in the
//! table; every lookup path here filters on is_active.

mod company_store;
mod driver_store;

pub use company_store::PgCompanyStore;
pub use driver_store::PgDriverStore;
