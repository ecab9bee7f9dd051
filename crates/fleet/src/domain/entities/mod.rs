//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Company: carrier organization, unique by registration number
//! - Driver: licensed driver, unique by license number
//!
//! Each entity comes with a `New*` create candidate and a `*Patch` partial
//! update; patches only overwrite fields that arrive non-blank.

mod company;
mod driver;

pub use company::*;
pub use driver::*;
