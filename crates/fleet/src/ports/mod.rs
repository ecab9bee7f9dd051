//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with the document store.
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod stores;

// Re-exports
pub use stores::*;
