//! Company Validators

use chrono::NaiveDate;

use crate::domain::entities::NewCompany;
use crate::domain::errors::DomainError;

use super::{
    canonical_date, has_text, is_valid_email, is_valid_mobile, non_blank, parse_date,
    validate_established_on,
};

/// Validate a create candidate.
///
/// Mandatory fields first, then the optional formatted fields when present.
/// Returns the canonical `yyyy-MM-dd` form of `established_on` so the caller
/// can persist the normalized value.
pub fn validate_for_create(
    new: &NewCompany,
    today: NaiveDate,
) -> Result<Option<String>, DomainError> {
    if !has_text(new.company_name.as_deref()) || !has_text(new.registration_number.as_deref()) {
        return Err(DomainError::MissingField(
            "Company Name, Registration Number are mandatory".to_string(),
        ));
    }

    let established_on = match non_blank(new.established_on.as_deref()) {
        Some(raw) => Some(validate_established_on_field(raw, today)?),
        None => None,
    };

    if let Some(mobile) = non_blank(new.primary_contact_mobile.as_deref()) {
        validate_contact_mobile(mobile)?;
    }

    if let Some(email) = non_blank(new.primary_contact_email.as_deref()) {
        validate_contact_email(email)?;
    }

    Ok(established_on)
}

/// Parse and range-check `establishedOn`, returning the canonical form.
pub fn validate_established_on_field(raw: &str, today: NaiveDate) -> Result<String, DomainError> {
    let date = parse_date("establishedOn date", raw)?;
    validate_established_on(date, today)?;
    Ok(canonical_date(date))
}

pub fn validate_contact_mobile(mobile: &str) -> Result<(), DomainError> {
    if !is_valid_mobile(mobile) {
        return Err(DomainError::InvalidFormat("Invalid mobile number".to_string()));
    }
    Ok(())
}

pub fn validate_contact_email(email: &str) -> Result<(), DomainError> {
    if !is_valid_email(email) {
        return Err(DomainError::InvalidFormat("Invalid email".to_string()));
    }
    Ok(())
}
