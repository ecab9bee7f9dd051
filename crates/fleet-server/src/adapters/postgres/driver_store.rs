//! PostgreSQL implementation of DriverStore

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fleet::{DomainError, Driver, DriverSearchFilter, DriverStore, SearchPage};

/// PostgreSQL implementation of DriverStore
pub struct PgDriverStore {
    pool: PgPool,
}

impl PgDriverStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct DriverRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    mobile: String,
    date_of_birth: String,
    license_number: String,
    experience_years: Option<i32>,
    address1: Option<String>,
    address2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    created_on: chrono::DateTime<chrono::Utc>,
    modified_on: chrono::DateTime<chrono::Utc>,
    is_active: bool,
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        Self {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            mobile: row.mobile,
            date_of_birth: row.date_of_birth,
            license_number: row.license_number,
            experience_years: row.experience_years,
            address1: row.address1,
            address2: row.address2,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            created_on: row.created_on,
            modified_on: row.modified_on,
            is_active: row.is_active,
        }
    }
}

/// Blank filter values count as absent.
fn normalize(filter: Option<&str>) -> Option<String> {
    filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl DriverStore for PgDriverStore {
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Driver>, DomainError> {
        let row = sqlx::query_as::<_, DriverRow>(
            "SELECT * FROM drivers WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Store(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn upsert(&self, driver: &Driver) -> Result<Driver, DomainError> {
        let row = match driver.id {
            Some(id) => {
                sqlx::query_as::<_, DriverRow>(
                    r#"
                    UPDATE drivers
                    SET first_name = $2, last_name = $3, email = $4, mobile = $5,
                        date_of_birth = $6, license_number = $7, experience_years = $8,
                        address1 = $9, address2 = $10, city = $11, state = $12,
                        zip_code = $13, modified_on = $14, is_active = $15
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&driver.first_name)
                .bind(&driver.last_name)
                .bind(&driver.email)
                .bind(&driver.mobile)
                .bind(&driver.date_of_birth)
                .bind(&driver.license_number)
                .bind(driver.experience_years)
                .bind(&driver.address1)
                .bind(&driver.address2)
                .bind(&driver.city)
                .bind(&driver.state)
                .bind(&driver.zip_code)
                .bind(driver.modified_on)
                .bind(driver.is_active)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, DriverRow>(
                    r#"
                    INSERT INTO drivers (
                        first_name, last_name, email, mobile, date_of_birth,
                        license_number, experience_years, address1, address2,
                        city, state, zip_code, created_on, modified_on, is_active
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
                    RETURNING *
                    "#,
                )
                .bind(&driver.first_name)
                .bind(&driver.last_name)
                .bind(&driver.email)
                .bind(&driver.mobile)
                .bind(&driver.date_of_birth)
                .bind(&driver.license_number)
                .bind(driver.experience_years)
                .bind(&driver.address1)
                .bind(&driver.address2)
                .bind(&driver.city)
                .bind(&driver.state)
                .bind(&driver.zip_code)
                .bind(driver.created_on)
                .bind(driver.modified_on)
                .bind(driver.is_active)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::Store(e.to_string()))?;

        Ok(row.into())
    }

    async fn exists_by_license_number(&self, license_number: &str) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM drivers WHERE license_number = $1 AND is_active = TRUE)",
        )
        .bind(license_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Store(e.to_string()))?;

        Ok(exists)
    }

    async fn search(
        &self,
        filter: &DriverSearchFilter,
        page_index: u32,
        items_per_page: u32,
    ) -> Result<SearchPage<Driver>, DomainError> {
        let first_name = normalize(filter.first_name.as_deref());
        let last_name = normalize(filter.last_name.as_deref());
        let license_number = normalize(filter.license_number.as_deref());

        let total_records = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM drivers
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR LOWER(first_name) = LOWER($1))
              AND ($2::text IS NULL OR LOWER(last_name) = LOWER($2))
              AND ($3::text IS NULL OR LOWER(license_number) = LOWER($3))
            "#,
        )
        .bind(&first_name)
        .bind(&last_name)
        .bind(&license_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Store(e.to_string()))?;

        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT * FROM drivers
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR LOWER(first_name) = LOWER($1))
              AND ($2::text IS NULL OR LOWER(last_name) = LOWER($2))
              AND ($3::text IS NULL OR LOWER(license_number) = LOWER($3))
            ORDER BY created_on ASC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(&first_name)
        .bind(&last_name)
        .bind(&license_number)
        .bind(items_per_page as i64)
        .bind(page_index as i64 * items_per_page as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Store(e.to_string()))?;

        Ok(SearchPage {
            items: rows.into_iter().map(Into::into).collect(),
            page_index,
            items_per_page,
            total_records: total_records as u64,
        })
    }
}
