//! Driver Application Service (Use Case)
//!
//! Orchestrates domain operations for Driver management.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use fleet::domain::validation;
use fleet::{
    DomainError, Driver, DriverPatch, DriverSearchFilter, DriverStore, NewDriver, SearchPage,
};

/// Application service for Driver operations
pub struct DriverService<S: DriverStore> {
    store: Arc<S>,
}

impl<S: DriverStore> DriverService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a new active driver.
    ///
    /// All business fields are mandatory; the license number must not be
    /// carried by any active record.
    pub async fn create(&self, new: NewDriver) -> Result<Driver, DomainError> {
        tracing::debug!("validating driver create candidate");

        let now = Utc::now();
        let date_of_birth = validation::driver::validate_for_create(&new, now.date_naive())?;

        let license_number = new.license_number.clone().unwrap_or_default();
        if self
            .store
            .exists_by_license_number(license_number.trim())
            .await?
        {
            return Err(DomainError::DuplicateKey(
                "Driver with the same License Number already exists".to_string(),
            ));
        }

        let driver = Driver::from_new(new, date_of_birth, now);
        let saved = self.store.upsert(&driver).await?;

        tracing::info!(id = ?saved.id, "driver created");

        Ok(saved)
    }

    /// Apply a partial update to an active driver.
    ///
    /// A changed license number must pass the uniqueness check before the
    /// patch is applied; the merge re-validates every incoming formatted
    /// field and either fully succeeds or leaves the record as-is.
    pub async fn update(&self, id: Uuid, patch: DriverPatch) -> Result<Driver, DomainError> {
        tracing::info!(%id, "updating driver");

        let existing = self
            .store
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Driver", id))?;

        if let Some(new_key) = patch.license_number_change(&existing) {
            if self.store.exists_by_license_number(new_key).await? {
                return Err(DomainError::DuplicateKey(
                    "Driver with the same License Number already exists".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let mut updated = existing.apply_patch(&patch, now.date_naive())?;
        updated.modified_on = now;

        let saved = self.store.upsert(&updated).await?;

        tracing::info!(%id, "driver updated");

        Ok(saved)
    }

    /// Fetch an active driver; soft-deleted records are invisible.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Driver, DomainError> {
        let driver = self.store.find_active_by_id(id).await?;

        match driver {
            Some(driver) => Ok(driver),
            None => {
                tracing::warn!(%id, "driver not found");
                Err(DomainError::not_found("Driver", id))
            }
        }
    }

    /// Paginated, anchored case-insensitive search over active drivers.
    pub async fn search(
        &self,
        filter: DriverSearchFilter,
        page_index: u32,
        items_per_page: u32,
    ) -> Result<SearchPage<Driver>, DomainError> {
        tracing::debug!(
            first_name = ?filter.first_name,
            last_name = ?filter.last_name,
            license_number = ?filter.license_number,
            page_index,
            items_per_page,
            "searching drivers"
        );

        self.store.search(&filter, page_index, items_per_page).await
    }

    /// Soft delete: mark inactive and stamp modified_on. Terminal; there is
    /// no resurrection path.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        tracing::info!(%id, "soft deleting driver");

        let mut driver = self
            .store
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Driver", id))?;

        driver.is_active = false;
        driver.modified_on = Utc::now();

        self.store.upsert(&driver).await?;

        tracing::info!(%id, "driver soft deleted");

        Ok(())
    }
}
