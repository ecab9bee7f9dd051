//! Driver - Licensed Driver
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::validation::{
    self, canonical_date, has_text, is_valid_email, is_valid_mobile, non_blank, parse_date,
};

/// Driver - unique by license number among active records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    /// Store-assigned; `None` until first persisted
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    /// Canonical `yyyy-MM-dd` form once validated
    pub date_of_birth: String,
    pub license_number: String,
    pub experience_years: Option<i32>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    /// false = soft-deleted; transitions only true -> false
    pub is_active: bool,
}

/// Create candidate - every field optional, the validator enforces
/// mandatory ones
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDriver {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub date_of_birth: Option<String>,
    pub license_number: Option<String>,
    pub experience_years: Option<i32>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Partial update - absent or blank fields leave the stored value untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriverPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub date_of_birth: Option<String>,
    pub license_number: Option<String>,
    pub experience_years: Option<i32>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl Driver {
    /// Build a new active Driver from a validated candidate.
    ///
    /// `date_of_birth` must already be in canonical form (the create
    /// validator returns it); `now` becomes both audit timestamps.
    pub fn from_new(new: NewDriver, date_of_birth: String, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            first_name: new.first_name.unwrap_or_default(),
            last_name: new.last_name.unwrap_or_default(),
            email: new.email.unwrap_or_default(),
            mobile: new.mobile.map(|m| m.trim().to_string()).unwrap_or_default(),
            date_of_birth,
            license_number: new.license_number.unwrap_or_default(),
            experience_years: new.experience_years,
            address1: new.address1,
            address2: new.address2,
            city: new.city,
            state: new.state,
            zip_code: new.zip_code,
            created_on: now,
            modified_on: now,
            is_active: true,
        }
    }

    /// Apply a partial update onto a copy of this record.
    ///
    /// Incoming email, mobile, and date of birth are re-validated before
    /// anything is written; a failure leaves the stored record untouched.
    /// License number uniqueness for a changed key is the caller's job (see
    /// [`DriverPatch::license_number_change`]).
    pub fn apply_patch(&self, patch: &DriverPatch, today: NaiveDate) -> Result<Self, DomainError> {
        let mut updated = self.clone();

        if has_text(patch.first_name.as_deref()) {
            updated.first_name = patch.first_name.clone().unwrap_or_default();
        }

        if has_text(patch.last_name.as_deref()) {
            updated.last_name = patch.last_name.clone().unwrap_or_default();
        }

        if let Some(email) = non_blank(patch.email.as_deref()) {
            if !is_valid_email(email) {
                return Err(DomainError::InvalidFormat(
                    "Please provide a valid email address".to_string(),
                ));
            }
            updated.email = email.to_string();
        }

        if let Some(mobile) = non_blank(patch.mobile.as_deref()) {
            if !is_valid_mobile(mobile) {
                return Err(DomainError::InvalidFormat(
                    "Please provide a valid mobile number".to_string(),
                ));
            }
            updated.mobile = mobile.trim().to_string();
        }

        if let Some(raw) = non_blank(patch.date_of_birth.as_deref()) {
            let dob = parse_date("dateOfBirth", raw)?;
            validation::validate_date_of_birth(dob, today)?;
            updated.date_of_birth = canonical_date(dob);
        }

        if has_text(patch.license_number.as_deref()) {
            updated.license_number = patch.license_number.clone().unwrap_or_default();
        }

        if let Some(years) = patch.experience_years {
            updated.experience_years = Some(years);
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

        Ok(updated)
    }
}

impl DriverPatch {
    /// The incoming license number, when it actually changes the key.
    ///
    /// A value that case-insensitively equals the existing key is accepted
    /// unconditionally and needs no uniqueness re-check.
    pub fn license_number_change<'a>(&'a self, existing: &Driver) -> Option<&'a str> {
        non_blank(self.license_number.as_deref())
            .filter(|incoming| !incoming.eq_ignore_ascii_case(&existing.license_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Driver {
        let now = Utc::now();
        Driver {
            id: Some(Uuid::new_v4()),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            email: "jo@x.com".to_string(),
            mobile: "9123456780".to_string(),
            date_of_birth: "2000-01-01".to_string(),
            license_number: "LIC1".to_string(),
            experience_years: Some(4),
            address1: None,
            address2: None,
            city: None,
            state: None,
            zip_code: None,
            created_on: now,
            modified_on: now,
            is_active: true,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_patch_omitted_fields_stay_untouched() {
        let driver = existing();
        let patch = DriverPatch {
            city: Some("Chennai".to_string()),
            ..Default::default()
        };

        let updated = driver.apply_patch(&patch, today()).unwrap();
        assert_eq!(updated.city.as_deref(), Some("Chennai"));
        assert_eq!(updated.email, "jo@x.com");
        assert_eq!(updated.experience_years, Some(4));
    }

    #[test]
    fn test_patch_experience_years_applies_when_present() {
        let driver = existing();
        let patch = DriverPatch {
            experience_years: Some(7),
            ..Default::default()
        };

        let updated = driver.apply_patch(&patch, today()).unwrap();
        assert_eq!(updated.experience_years, Some(7));
    }

    #[test]
    fn test_patch_invalid_mobile_aborts_whole_update() {
        let driver = existing();
        let patch = DriverPatch {
            first_name: Some("Joanna".to_string()),
            mobile: Some("1234567890".to_string()),
            ..Default::default()
        };

        let err = driver.apply_patch(&patch, today()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidFormat(_)));
        assert_eq!(driver.first_name, "Jo");
    }

    #[test]
    fn test_patch_underage_dob_rejected() {
        let driver = existing();
        let patch = DriverPatch {
            date_of_birth: Some("2010-01-01".to_string()),
            ..Default::default()
        };

        let err = driver.apply_patch(&patch, today()).unwrap_err();
        assert!(matches!(err, DomainError::Underage(_)));
    }

    #[test]
    fn test_same_license_number_case_insensitive_needs_no_recheck() {
        let driver = existing();
        let patch = DriverPatch {
            license_number: Some("lic1".to_string()),
            ..Default::default()
        };

        assert!(patch.license_number_change(&driver).is_none());
    }

    #[test]
    fn test_changed_license_number_is_reported() {
        let driver = existing();
        let patch = DriverPatch {
            license_number: Some("LIC2".to_string()),
            ..Default::default()
        };

        assert_eq!(patch.license_number_change(&driver), Some("LIC2"));
    }
}
