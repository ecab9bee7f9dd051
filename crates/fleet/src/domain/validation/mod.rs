//! Shared Validation Primitives
//!
//! Regex and date constants plus the pure field validators used by both
//! entity pipelines. Everything here is side-effect-free and deterministic
//! given the caller-supplied current date.

use std::sync::LazyLock;

use chrono::{Months, NaiveDate};
use regex::Regex;

use crate::domain::errors::DomainError;

pub mod company;
pub mod driver;

/// Canonical format for `establishedOn` / `dateOfBirth` fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum driver age in years
pub const MINIMUM_DRIVER_AGE_YEARS: u32 = 18;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("valid mobile pattern"));

/// Present and non-blank after trimming, `StringUtils::hasText` style.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Filters a field down to `Some` only when it carries non-blank text.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Full anchored email match.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Full anchored mobile match: 10 digits, first digit 6-9. Input is trimmed
/// before matching since the pattern itself allows no separators.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_PATTERN.is_match(mobile.trim())
}

/// Strict `yyyy-MM-dd` parse of a trimmed date field.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        DomainError::InvalidDate(format!("Invalid {field}. Expected format is yyyy-MM-dd"))
    })
}

/// Canonical string form of a date field.
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Range check for `establishedOn`: no future dates, nothing before 1800-01-01.
pub fn validate_established_on(date: NaiveDate, today: NaiveDate) -> Result<(), DomainError> {
    if date > today {
        return Err(DomainError::InvalidDate(
            "Please provide a valid registration date. Future date is not allowed.".to_string(),
        ));
    }

    let floor = NaiveDate::from_ymd_opt(1800, 1, 1).expect("valid calendar date");
    if date < floor {
        return Err(DomainError::InvalidDate(
            "Please provide a valid registration date.".to_string(),
        ));
    }

    Ok(())
}

/// Range and minimum-age check for `dateOfBirth`.
///
/// The age check is the exact comparison `dob > today - 18 years`: a driver
/// whose 18th birthday falls on `today` passes.
pub fn validate_date_of_birth(dob: NaiveDate, today: NaiveDate) -> Result<(), DomainError> {
    if dob > today {
        return Err(DomainError::InvalidDate(
            "Date of birth cannot be a future date".to_string(),
        ));
    }

    let adult_cutoff = today - Months::new(12 * MINIMUM_DRIVER_AGE_YEARS);
    if dob > adult_cutoff {
        return Err(DomainError::Underage(
            "Driver must be at least 18 years old".to_string(),
        ));
    }

    Ok(())
}
