//! PostgreSQL implementation of CompanyStore

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use fleet::{Company, CompanySearchFilter, CompanyStore, DomainError, SearchPage};

/// PostgreSQL implementation of CompanyStore
pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: Uuid,
    company_name: String,
    registration_number: String,
    established_on: Option<String>,
    website: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    primary_contact_first_name: Option<String>,
    primary_contact_last_name: Option<String>,
    primary_contact_email: Option<String>,
    primary_contact_mobile: Option<String>,
    created_on: chrono::DateTime<chrono::Utc>,
    modified_on: chrono::DateTime<chrono::Utc>,
    is_active: bool,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: Some(row.id),
            company_name: row.company_name,
            registration_number: row.registration_number,
            established_on: row.established_on,
            website: row.website,
            address1: row.address1,
            address2: row.address2,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            primary_contact_first_name: row.primary_contact_first_name,
            primary_contact_last_name: row.primary_contact_last_name,
            primary_contact_email: row.primary_contact_email,
            primary_contact_mobile: row.primary_contact_mobile,
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
impl CompanyStore for PgCompanyStore {
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Company>, DomainError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            "SELECT * FROM companies WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Store(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn upsert(&self, company: &Company) -> Result<Company, DomainError> {
        let row = match company.id {
            Some(id) => {
                sqlx::query_as::<_, CompanyRow>(
                    r#"
                    UPDATE companies
                    SET company_name = $2, registration_number = $3, established_on = $4,
                        website = $5, address1 = $6, address2 = $7, city = $8, state = $9,
                        zip_code = $10, primary_contact_first_name = $11,
                        primary_contact_last_name = $12, primary_contact_email = $13,
                        primary_contact_mobile = $14, modified_on = $15, is_active = $16
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&company.company_name)
                .bind(&company.registration_number)
                .bind(&company.established_on)
                .bind(&company.website)
                .bind(&company.address1)
                .bind(&company.address2)
                .bind(&company.city)
                .bind(&company.state)
                .bind(&company.zip_code)
                .bind(&company.primary_contact_first_name)
                .bind(&company.primary_contact_last_name)
                .bind(&company.primary_contact_email)
                .bind(&company.primary_contact_mobile)
                .bind(company.modified_on)
                .bind(company.is_active)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, CompanyRow>(
                    r#"
                    INSERT INTO companies (
                        company_name, registration_number, established_on, website,
                        address1, address2, city, state, zip_code,
                        primary_contact_first_name, primary_contact_last_name,
                        primary_contact_email, primary_contact_mobile,
                        created_on, modified_on, is_active
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                    RETURNING *
                    "#,
                )
                .bind(&company.company_name)
                .bind(&company.registration_number)
                .bind(&company.established_on)
                .bind(&company.website)
                .bind(&company.address1)
                .bind(&company.address2)
                .bind(&company.city)
                .bind(&company.state)
                .bind(&company.zip_code)
                .bind(&company.primary_contact_first_name)
                .bind(&company.primary_contact_last_name)
                .bind(&company.primary_contact_email)
                .bind(&company.primary_contact_mobile)
                .bind(company.created_on)
                .bind(company.modified_on)
                .bind(company.is_active)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::Store(e.to_string()))?;

        Ok(row.into())
    }

    async fn exists_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE registration_number = $1 AND is_active = TRUE)",
        )
        .bind(registration_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Store(e.to_string()))?;

        Ok(exists)
    }

    async fn search(
        &self,
        filter: &CompanySearchFilter,
        page_index: u32,
        items_per_page: u32,
    ) -> Result<SearchPage<Company>, DomainError> {
        let company_name = normalize(filter.company_name.as_deref());
        let registration_number = normalize(filter.registration_number.as_deref());

        let total_records = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM companies
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR LOWER(company_name) = LOWER($1))
              AND ($2::text IS NULL OR LOWER(registration_number) = LOWER($2))
            "#,
        )
        .bind(&company_name)
        .bind(&registration_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Store(e.to_string()))?;

        let rows = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT * FROM companies
            WHERE is_active = TRUE
              AND ($1::text IS NULL OR LOWER(company_name) = LOWER($1))
              AND ($2::text IS NULL OR LOWER(registration_number) = LOWER($2))
            ORDER BY created_on ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&company_name)
        .bind(&registration_number)
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
