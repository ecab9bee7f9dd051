//! Driver Validators

use chrono::NaiveDate;

use crate::domain::entities::NewDriver;
use crate::domain::errors::DomainError;

use super::{
    canonical_date, has_text, is_valid_email, is_valid_mobile, parse_date, validate_date_of_birth,
};

/// Validate a create candidate.
///
/// All six business fields are mandatory; email/mobile format and the date of
/// birth range/age checks run after the mandatory gate. Returns the canonical
/// `yyyy-MM-dd` form of the date of birth.
pub fn validate_for_create(new: &NewDriver, today: NaiveDate) -> Result<String, DomainError> {
    if !has_text(new.first_name.as_deref())
        || !has_text(new.last_name.as_deref())
        || !has_text(new.email.as_deref())
        || !has_text(new.mobile.as_deref())
        || !has_text(new.date_of_birth.as_deref())
        || !has_text(new.license_number.as_deref())
    {
        return Err(DomainError::MissingField(
            "First Name, Last Name, Email, Mobile, DOB, and License Number are mandatory"
                .to_string(),
        ));
    }

    validate_email_field(new.email.as_deref().unwrap_or_default())?;
    validate_mobile_field(new.mobile.as_deref().unwrap_or_default())?;
    validate_date_of_birth_field(new.date_of_birth.as_deref().unwrap_or_default(), today)
}

pub fn validate_email_field(email: &str) -> Result<(), DomainError> {
    if !is_valid_email(email) {
        return Err(DomainError::InvalidFormat(
            "Please provide a valid email address".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_mobile_field(mobile: &str) -> Result<(), DomainError> {
    if !is_valid_mobile(mobile) {
        return Err(DomainError::InvalidFormat(
            "Please provide a valid mobile number".to_string(),
        ));
    }
    Ok(())
}

/// Parse, range-check, and age-check `dateOfBirth`, returning the canonical
/// form.
pub fn validate_date_of_birth_field(raw: &str, today: NaiveDate) -> Result<String, DomainError> {
    let dob = parse_date("dateOfBirth", raw)?;
    validate_date_of_birth(dob, today)?;
    Ok(canonical_date(dob))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn candidate() -> NewDriver {
        NewDriver {
            first_name: Some("Jo".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("jo@x.com".to_string()),
            mobile: Some("9123456780".to_string()),
            date_of_birth: Some("2000-01-01".to_string()),
            license_number: Some("LIC1".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_candidate_returns_canonical_dob() {
        assert_eq!(validate_for_create(&candidate(), today()).unwrap(), "2000-01-01");
    }

    #[test]
    fn test_any_missing_field_fails_before_format_checks() {
        for strip in 0..6 {
            let mut new = candidate();
            match strip {
                0 => new.first_name = None,
                1 => new.last_name = None,
                2 => new.email = Some("  ".to_string()),
                3 => new.mobile = None,
                4 => new.date_of_birth = None,
                _ => new.license_number = None,
            }
            assert!(
                matches!(
                    validate_for_create(&new, today()),
                    Err(DomainError::MissingField(_))
                ),
                "field {strip} should be mandatory"
            );
        }
    }

    #[test]
    fn test_bad_email_format_rejected() {
        let mut new = candidate();
        new.email = Some("not-an-email".to_string());
        assert!(matches!(
            validate_for_create(&new, today()),
            Err(DomainError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_bad_mobile_format_rejected() {
        let mut new = candidate();
        new.mobile = Some("98765432100".to_string());
        assert!(matches!(
            validate_for_create(&new, today()),
            Err(DomainError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_unparsable_dob_rejected() {
        let mut new = candidate();
        new.date_of_birth = Some("01/01/2000".to_string());
        let err = validate_for_create(&new, today()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid dateOfBirth. Expected format is yyyy-MM-dd");
    }

    #[test]
    fn test_underage_dob_rejected() {
        let mut new = candidate();
        new.date_of_birth = Some("2008-06-16".to_string());
        assert!(matches!(
            validate_for_create(&new, today()),
            Err(DomainError::Underage(_))
        ));
    }

    #[test]
    fn test_eighteenth_birthday_today_accepted() {
        let mut new = candidate();
        new.date_of_birth = Some("2007-06-15".to_string());
        assert!(validate_for_create(&new, today()).is_ok());
    }
}
