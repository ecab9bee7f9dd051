//! Company Application Service (Use Case)
//!
//! Orchestrates domain operations for Company management.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use fleet::domain::validation;
use fleet::{
    Company, CompanyPatch, CompanySearchFilter, CompanyStore, DomainError, NewCompany, SearchPage,
};

/// Application service for Company operations
pub struct CompanyService<S: CompanyStore> {
    store: Arc<S>,
}

impl<S: CompanyStore> CompanyService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a new active company.
    ///
    /// Validates mandatory fields and formats, rejects a registration number
    /// already carried by an active record, then persists with
    /// created_on == modified_on.
    pub async fn create(&self, new: NewCompany) -> Result<Company, DomainError> {
        tracing::debug!("validating company create candidate");

        let now = Utc::now();
        let established_on = validation::company::validate_for_create(&new, now.date_naive())?;

        let registration_number = new.registration_number.clone().unwrap_or_default();
        if self
            .store
            .exists_by_registration_number(registration_number.trim())
            .await?
        {
            return Err(DomainError::DuplicateKey(
                "Company with the same Registration Number already exists".to_string(),
            ));
        }

        let company = Company::from_new(new, established_on, now);
        let saved = self.store.upsert(&company).await?;

        tracing::info!(id = ?saved.id, "company created");

        Ok(saved)
    }

    /// Apply a partial update to an active company.
    ///
    /// A changed registration number must pass the uniqueness check before
    /// the patch is applied; the merge itself re-validates every incoming
    /// formatted field and either fully succeeds or leaves the record as-is.
    pub async fn update(&self, id: Uuid, patch: CompanyPatch) -> Result<Company, DomainError> {
        tracing::info!(%id, "updating company");

        let existing = self
            .store
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company", id))?;

        if let Some(new_key) = patch.registration_number_change(&existing) {
            if self.store.exists_by_registration_number(new_key).await? {
                return Err(DomainError::DuplicateKey(
                    "Company with the same Registration Number already exists".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let mut updated = existing.apply_patch(&patch, now.date_naive())?;
        updated.modified_on = now;

        let saved = self.store.upsert(&updated).await?;

        tracing::info!(%id, "company updated");

        Ok(saved)
    }

    /// Fetch an active company; soft-deleted records are invisible.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Company, DomainError> {
        let company = self.store.find_active_by_id(id).await?;

        match company {
            Some(company) => Ok(company),
            None => {
                tracing::warn!(%id, "company not found");
                Err(DomainError::not_found("Company", id))
            }
        }
    }

    /// Paginated, anchored case-insensitive search over active companies.
    pub async fn search(
        &self,
        filter: CompanySearchFilter,
        page_index: u32,
        items_per_page: u32,
    ) -> Result<SearchPage<Company>, DomainError> {
        tracing::debug!(
            company_name = ?filter.company_name,
            registration_number = ?filter.registration_number,
            page_index,
            items_per_page,
            "searching companies"
        );

        self.store.search(&filter, page_index, items_per_page).await
    }

    /// Soft delete: mark inactive and stamp modified_on. Terminal; there is
    /// no resurrection path.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        tracing::info!(%id, "soft deleting company");

        let mut company = self
            .store
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company", id))?;

        company.is_active = false;
        company.modified_on = Utc::now();

        self.store.upsert(&company).await?;

        tracing::info!(%id, "company soft deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryCompanyStore;

    fn service() -> CompanyService<MemoryCompanyStore> {
        CompanyService::new(Arc::new(MemoryCompanyStore::new()))
    }

    fn candidate(name: &str, reg: &str) -> NewCompany {
        NewCompany {
            company_name: Some(name.to_string()),
            registration_number: Some(reg.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_stamps_timestamps_and_active_flag() {
        let service = service();
        let saved = service.create(candidate("Acme", "REG-1")).await.unwrap();

        assert!(saved.id.is_some());
        assert!(saved.is_active);
        assert_eq!(saved.created_on, saved.modified_on);
    }

    #[tokio::test]
    async fn test_create_duplicate_active_registration_number_fails() {
        let service = service();
        service.create(candidate("Acme", "REG-1")).await.unwrap();

        let err = service.create(candidate("Other", "REG-1")).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
    }

    #[tokio::test]
    async fn test_soft_deleted_registration_number_is_reusable() {
        let service = service();
        let first = service.create(candidate("Acme", "REG-1")).await.unwrap();
        service.delete(first.id.unwrap()).await.unwrap();

        assert!(service.create(candidate("Acme Again", "REG-1")).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_only_overwrites_provided_fields() {
        let service = service();
        let mut new = candidate("Acme", "REG-1");
        new.city = Some("Pune".to_string());
        new.website = Some("https://acme.example".to_string());
        let saved = service.create(new).await.unwrap();

        let patch = CompanyPatch {
            city: Some("Mumbai".to_string()),
            ..Default::default()
        };
        let updated = service.update(saved.id.unwrap(), patch).await.unwrap();

        assert_eq!(updated.city.as_deref(), Some("Mumbai"));
        assert_eq!(updated.website.as_deref(), Some("https://acme.example"));
        assert_eq!(updated.company_name, "Acme");
        assert!(updated.modified_on > updated.created_on);
    }

    #[tokio::test]
    async fn test_update_to_taken_registration_number_fails() {
        let service = service();
        service.create(candidate("Acme", "REG-1")).await.unwrap();
        let second = service.create(candidate("Other", "REG-2")).await.unwrap();

        let patch = CompanyPatch {
            registration_number: Some("REG-1".to_string()),
            ..Default::default()
        };
        let err = service.update(second.id.unwrap(), patch).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
    }

    #[tokio::test]
    async fn test_update_same_key_different_case_is_accepted() {
        let service = service();
        let saved = service.create(candidate("Acme", "REG-1")).await.unwrap();

        let patch = CompanyPatch {
            registration_number: Some("reg-1".to_string()),
            ..Default::default()
        };
        let updated = service.update(saved.id.unwrap(), patch).await.unwrap();
        assert_eq!(updated.registration_number, "reg-1");
    }

    #[tokio::test]
    async fn test_get_by_id_hides_soft_deleted() {
        let service = service();
        let saved = service.create(candidate("Acme", "REG-1")).await.unwrap();
        let id = saved.id.unwrap();

        service.delete(id).await.unwrap();

        let err = service.get_by_id(id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_twice_fails_with_not_found() {
        let service = service();
        let saved = service.create(candidate("Acme", "REG-1")).await.unwrap();
        let id = saved.id.unwrap();

        service.delete(id).await.unwrap();
        let err = service.delete(id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_search_anchored_case_insensitive() {
        let service = service();
        service.create(candidate("Acme", "REG-1")).await.unwrap();
        service.create(candidate("ACME", "REG-2")).await.unwrap();
        service.create(candidate("Acme Corp", "REG-3")).await.unwrap();

        let filter = CompanySearchFilter {
            company_name: Some("acme".to_string()),
            ..Default::default()
        };
        let page = service.search(filter, 0, 10).await.unwrap();

        assert_eq!(page.total_records, 2);
        assert!(page.items.iter().all(|c| c.company_name.eq_ignore_ascii_case("acme")));
    }

    #[tokio::test]
    async fn test_search_no_filters_returns_active_ordered_by_created_on() {
        let service = service();
        let a = service.create(candidate("A", "REG-1")).await.unwrap();
        let b = service.create(candidate("B", "REG-2")).await.unwrap();
        let c = service.create(candidate("C", "REG-3")).await.unwrap();
        service.delete(b.id.unwrap()).await.unwrap();

        let page = service.search(CompanySearchFilter::default(), 0, 10).await.unwrap();

        assert_eq!(page.total_records, 2);
        assert_eq!(page.items[0].id, a.id);
        assert_eq!(page.items[1].id, c.id);
    }

    #[tokio::test]
    async fn test_search_pagination_window() {
        let service = service();
        for i in 0..5 {
            service
                .create(candidate(&format!("Co {i}"), &format!("REG-{i}")))
                .await
                .unwrap();
        }

        let page = service.search(CompanySearchFilter::default(), 1, 2).await.unwrap();

        assert_eq!(page.total_records, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page_index, 1);
        assert_eq!(page.items_per_page, 2);
        assert_eq!(page.items[0].company_name, "Co 2");
    }
}
