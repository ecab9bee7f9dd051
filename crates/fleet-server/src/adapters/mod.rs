//! Infrastructure Adapters
//!
//! Concrete implementations of the store ports.

pub mod postgres;

pub use postgres::{PgCompanyStore, PgDriverStore};
