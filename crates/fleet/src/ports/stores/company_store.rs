//! Company Store Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Company};

/// Search filter for company queries. Provided fields are ANDed; each is an
/// anchored, case-insensitive equality match. Blank values count as absent.
#[derive(Debug, Default, Clone)]
pub struct CompanySearchFilter {
    pub company_name: Option<String>,
    pub registration_number: Option<String>,
}

/// Store interface for Company documents
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Fetch an active company by id; soft-deleted records are invisible.
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Company>, DomainError>;

    /// Persist the whole document, assigning an id when it has none.
    /// Returns the persisted form.
    async fn upsert(&self, company: &Company) -> Result<Company, DomainError>;

    /// Whether an active company already carries this registration number.
    async fn exists_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<bool, DomainError>;

    /// Paginated search over active companies, ordered by created_on
    /// ascending.
    async fn search(
        &self,
        filter: &CompanySearchFilter,
        page_index: u32,
        items_per_page: u32,
    ) -> Result<super::SearchPage<Company>, DomainError>;
}
