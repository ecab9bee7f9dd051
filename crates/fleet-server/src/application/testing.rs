//! In-Memory Store Doubles
//!
//! Whole-document stores backed by a Vec under a Mutex, matching the port
//! contracts closely enough to exercise the service pipelines without a
//! database: active-scoped lookups, id assignment on first upsert, anchored
//! case-insensitive search, created_on ordering.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use fleet::{
    Company, CompanySearchFilter, CompanyStore, DomainError, Driver, DriverSearchFilter,
    DriverStore, SearchPage,
};

fn filter_matches(filter: Option<&str>, value: &str) -> bool {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => value.eq_ignore_ascii_case(f),
        None => true,
    }
}

fn page_window<T: Clone>(
    mut items: Vec<T>,
    page_index: u32,
    items_per_page: u32,
) -> SearchPage<T> {
    let total_records = items.len() as u64;
    let start = (page_index as usize).saturating_mul(items_per_page as usize);
    let items = if start >= items.len() {
        Vec::new()
    } else {
        items.split_off(start).into_iter().take(items_per_page as usize).collect()
    };

    SearchPage {
        items,
        page_index,
        items_per_page,
        total_records,
    }
}

#[derive(Default)]
pub struct MemoryCompanyStore {
    records: Mutex<Vec<Company>>,
}

impl MemoryCompanyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyStore for MemoryCompanyStore {
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Company>, DomainError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|c| c.id == Some(id) && c.is_active)
            .cloned())
    }

    async fn upsert(&self, company: &Company) -> Result<Company, DomainError> {
        let mut records = self.records.lock().unwrap();
        let mut company = company.clone();

        match company.id {
            Some(id) => {
                if let Some(slot) = records.iter_mut().find(|c| c.id == Some(id)) {
                    *slot = company.clone();
                } else {
                    records.push(company.clone());
                }
            }
            None => {
                company.id = Some(Uuid::new_v4());
                records.push(company.clone());
            }
        }

        Ok(company)
    }

    async fn exists_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<bool, DomainError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .any(|c| c.is_active && c.registration_number == registration_number))
    }

    async fn search(
        &self,
        filter: &CompanySearchFilter,
        page_index: u32,
        items_per_page: u32,
    ) -> Result<SearchPage<Company>, DomainError> {
        let records = self.records.lock().unwrap();
        let mut matches: Vec<Company> = records
            .iter()
            .filter(|c| {
                c.is_active
                    && filter_matches(filter.company_name.as_deref(), &c.company_name)
                    && filter_matches(
                        filter.registration_number.as_deref(),
                        &c.registration_number,
                    )
            })
            .cloned()
            .collect();
        matches.sort_by_key(|c| c.created_on);

        Ok(page_window(matches, page_index, items_per_page))
    }
}

#[derive(Default)]
pub struct MemoryDriverStore {
    records: Mutex<Vec<Driver>>,
}

impl MemoryDriverStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DriverStore for MemoryDriverStore {
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Driver>, DomainError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|d| d.id == Some(id) && d.is_active)
            .cloned())
    }

    async fn upsert(&self, driver: &Driver) -> Result<Driver, DomainError> {
        let mut records = self.records.lock().unwrap();
        let mut driver = driver.clone();

        match driver.id {
            Some(id) => {
                if let Some(slot) = records.iter_mut().find(|d| d.id == Some(id)) {
                    *slot = driver.clone();
                } else {
                    records.push(driver.clone());
                }
            }
            None => {
                driver.id = Some(Uuid::new_v4());
                records.push(driver.clone());
            }
        }

        Ok(driver)
    }

    async fn exists_by_license_number(&self, license_number: &str) -> Result<bool, DomainError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .any(|d| d.is_active && d.license_number == license_number))
    }

    async fn search(
        &self,
        filter: &DriverSearchFilter,
        page_index: u32,
        items_per_page: u32,
    ) -> Result<SearchPage<Driver>, DomainError> {
        let records = self.records.lock().unwrap();
        let mut matches: Vec<Driver> = records
            .iter()
            .filter(|d| {
                d.is_active
                    && filter_matches(filter.first_name.as_deref(), &d.first_name)
                    && filter_matches(filter.last_name.as_deref(), &d.last_name)
                    && filter_matches(filter.license_number.as_deref(), &d.license_number)
            })
            .cloned()
            .collect();
        matches.sort_by_key(|d| d.created_on);

        Ok(page_window(matches, page_index, items_per_page))
    }
}
