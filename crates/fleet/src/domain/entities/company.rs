//! Company - Carrier Organization
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::validation::{
    self, canonical_date, has_text, is_valid_email, is_valid_mobile, non_blank, parse_date,
};

/// Company - carrier organization, unique by registration number among
/// active records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Store-assigned; `None` until first persisted
    pub id: Option<Uuid>,
    pub company_name: String,
    pub registration_number: String,
    /// Canonical `yyyy-MM-dd` form once validated
    pub established_on: Option<String>,
    pub website: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub primary_contact_first_name: Option<String>,
    pub primary_contact_last_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_mobile: Option<String>,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    /// false = soft-deleted; transitions only true -> false
    pub is_active: bool,
}

/// Create candidate - every field optional, the validator enforces
/// mandatory ones
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCompany {
    pub company_name: Option<String>,
    pub registration_number: Option<String>,
    pub established_on: Option<String>,
    pub website: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub primary_contact_first_name: Option<String>,
    pub primary_contact_last_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_mobile: Option<String>,
}

/// Partial update - absent or blank fields leave the stored value untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub company_name: Option<String>,
    pub registration_number: Option<String>,
    pub established_on: Option<String>,
    pub website: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub primary_contact_first_name: Option<String>,
    pub primary_contact_last_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_mobile: Option<String>,
}

impl Company {
    /// Build a new active Company from a validated candidate.
    ///
    /// `established_on` must already be in canonical form (the create
    /// validator returns it); `now` becomes both audit timestamps.
    pub fn from_new(new: NewCompany, established_on: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            company_name: new.company_name.unwrap_or_default(),
            registration_number: new.registration_number.unwrap_or_default(),
            established_on,
            website: new.website,
            address1: new.address1,
            address2: new.address2,
            city: new.city,
            state: new.state,
            zip_code: new.zip_code,
            primary_contact_first_name: new.primary_contact_first_name,
            primary_contact_last_name: new.primary_contact_last_name,
            primary_contact_email: new.primary_contact_email,
            primary_contact_mobile: new.primary_contact_mobile,
            created_on: now,
            modified_on: now,
            is_active: true,
        }
    }

    /// Apply a partial update onto a copy of this record.
    ///
    /// Every incoming field is validated before anything is written, so a
    /// failure leaves the stored record untouched. The registration number
    /// uniqueness check against the store is the caller's job (see
    /// [`CompanyPatch::registration_number_change`]); by the time the patch
    /// is applied a changed key has already been cleared.
    pub fn apply_patch(&self, patch: &CompanyPatch, today: NaiveDate) -> Result<Self, DomainError> {
        let mut updated = self.clone();

        if has_text(patch.company_name.as_deref()) {
            updated.company_name = patch.company_name.clone().unwrap_or_default();
        }

        if let Some(raw) = non_blank(patch.established_on.as_deref()) {
            let date = parse_date("establishedOn date", raw)?;
            validation::validate_established_on(date, today)?;
            updated.established_on = Some(canonical_date(date));
        }

        if let Some(mobile) = non_blank(patch.primary_contact_mobile.as_deref()) {
            if !is_valid_mobile(mobile) {
                return Err(DomainError::InvalidFormat("Invalid mobile number".to_string()));
            }
            updated.primary_contact_mobile = Some(mobile.trim().to_string());
        }

        if has_text(patch.registration_number.as_deref()) {
            updated.registration_number = patch.registration_number.clone().unwrap_or_default();
        }

        if has_text(patch.website.as_deref()) {
            updated.website = patch.website.clone();
        }

        if has_text(patch.address1.as_deref()) {
            updated.address1 = patch.address1.clone();
        }

        if has_text(patch.address2.as_deref()) {
            updated.address2 = patch.address2.clone();
        }

        if has_text(patch.city.as_deref()) {
            updated.city = patch.city.clone();
        }

        if has_text(patch.state.as_deref()) {
            updated.state = patch.state.clone();
        }

        if has_text(patch.zip_code.as_deref()) {
            updated.zip_code = patch.zip_code.clone();
        }

        if has_text(patch.primary_contact_first_name.as_deref()) {
            updated.primary_contact_first_name = patch.primary_contact_first_name.clone();
        }

        if has_text(patch.primary_contact_last_name.as_deref()) {
            updated.primary_contact_last_name = patch.primary_contact_last_name.clone();
        }

        if let Some(email) = non_blank(patch.primary_contact_email.as_deref()) {
            if !is_valid_email(email) {
                return Err(DomainError::InvalidFormat("Invalid email".to_string()));
            }
            updated.primary_contact_email = Some(email.to_string());
        }

        Ok(updated)
    }
}

impl CompanyPatch {
    /// The incoming registration number, when it actually changes the key.
    ///
    /// A value that case-insensitively equals the existing key is accepted
    /// unconditionally and needs no uniqueness re-check.
    pub fn registration_number_change<'a>(&'a self, existing: &Company) -> Option<&'a str> {
        non_blank(self.registration_number.as_deref())
            .filter(|incoming| !incoming.eq_ignore_ascii_case(&existing.registration_number))
    }
}
