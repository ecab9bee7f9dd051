//! HTTP Models
//!
//! Request/response DTOs for the transport layer. The wire format is
//! camelCase, matching the public API; domain entities stay snake_case.

mod company;
mod driver;

pub use company::*;
pub use driver::*;
