//! Driver Store Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Driver};

/// Search filter for driver queries. Provided fields are ANDed; each is an
/// anchored, case-insensitive equality match. Blank values count as absent.
#[derive(Debug, Default, Clone)]
pub struct DriverSearchFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub license_number: Option<String>,
}

/// Store interface for Driver documents
#[async_trait]
pub trait DriverStore: Send + Sync {
    /// Fetch an active driver by id; soft-deleted records are invisible.
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Driver>, DomainError>;

    /// Persist the whole document, assigning an id when it has none.
    /// Returns the persisted form.
    async fn upsert(&self, driver: &Driver) -> Result<Driver, DomainError>;

    /// Whether an active driver already carries this license number.
    async fn exists_by_license_number(&self, license_number: &str) -> Result<bool, DomainError>;

    /// Paginated search over active drivers, ordered by created_on ascending.
    async fn search(
        &self,
        filter: &DriverSearchFilter,
        page_index: u32,
        items_per_page: u32,
    ) -> Result<super::SearchPage<Driver>, DomainError>;
}
