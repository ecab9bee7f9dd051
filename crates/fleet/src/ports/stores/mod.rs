//! Store Ports
//!
//! Abstract interfaces for the document store, one per entity type. The
//! store is assumed atomic at the single-document level: find-by-id, upsert,
//! existence check, and paginated search. All lookup paths are scoped to
//! active records; soft-deleted documents are invisible through these traits.

mod company_store;
mod driver_store;

pub use company_store::*;
pub use driver_store::*;

/// One page of search results plus the effective paging parameters.
///
/// `total_records` counts every match, independent of the requested window.
#[derive(Debug, Clone)]
pub struct SearchPage<T> {
    pub items: Vec<T>,
    pub page_index: u32,
    pub items_per_page: u32,
    pub total_records: u64,
}
