//! Query parameters and custom validator functions shared by the
//! request DTOs.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::ValidationError;

/// Listing mode: `active=true` returns the dropdown-feeding view, with
/// soft-deleted/disabled records filtered out.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListParams {
    #[serde(default)]
    pub active: bool,
}

/// Short codes are uppercase alphanumeric, no spaces or punctuation.
pub fn validate_upper_alnum(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        Ok(())
    } else {
        Err(ValidationError::new("upper_alnum"))
    }
}

/// Durations are `mm:ss` strings, kept textual on purpose.
pub fn validate_duration(value: &str) -> Result<(), ValidationError> {
    let parts: Vec<&str> = value.split(':').collect();
    let valid = parts.len() == 2
        && parts.iter().all(|p| p.len() == 2)
        && parts
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_digit()))
        && parts[1].parse::<u8>().is_ok_and(|s| s < 60);
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("duration_mm_ss"))
    }
}

/// CPF in its formatted shape: `000.000.000-00`.
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let valid = bytes.len() == 14
        && bytes.iter().enumerate().all(|(i, b)| match i {
            3 | 7 => *b == b'.',
            11 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("cpf_format"))
    }
}

/// Uploaded filenames become a single path component of the storage key.
/// Separators and dot-only names would let a filename climb out of the
/// upload directory, so they are rejected outright.
pub fn validate_filename(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && !value.contains(['/', '\\']) && value != "." && value != ".." {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_filename"))
    }
}

/// Birth dates cannot lie in the future.
pub fn validate_birth_date(value: &chrono::NaiveDate) -> Result<(), ValidationError> {
    if *value <= chrono::Utc::now().date_naive() {
        Ok(())
    } else {
        Err(ValidationError::new("birth_date_in_future"))
    }
}

pub const BR_STATES: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

pub fn validate_state(value: &str) -> Result<(), ValidationError> {
    if BR_STATES.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_state"))
    }
}

/// The closed list of age-range labels used by brackets.
pub const AGE_RANGE_LABELS: &[&str] = &[
    "07 a 08 anos",
    "09 a 10 anos",
    "10 a 11 anos",
    "11 a 12 anos",
    "12 a 13 anos",
    "14 a 15 anos",
    "16 a 18 anos",
    "19 anos ou mais",
];

pub fn validate_age_range_label(value: &str) -> Result<(), ValidationError> {
    if AGE_RANGE_LABELS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_age_range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_must_be_uppercase_alphanumeric() {
        assert!(validate_upper_alnum("INT").is_ok());
        assert!(validate_upper_alnum("B10").is_ok());
        assert!(validate_upper_alnum("int").is_err());
        assert!(validate_upper_alnum("IN T").is_err());
        assert!(validate_upper_alnum("").is_err());
    }

    #[test]
    fn durations_are_mm_ss() {
        assert!(validate_duration("02:30").is_ok());
        assert!(validate_duration("00:59").is_ok());
        assert!(validate_duration("2:30").is_err());
        assert!(validate_duration("02:60").is_err());
        assert!(validate_duration("0230").is_err());
    }

    #[test]
    fn cpf_must_be_formatted() {
        assert!(validate_cpf("111.222.333-44").is_ok());
        assert!(validate_cpf("11122233344").is_err());
        assert!(validate_cpf("111.222.333-4X").is_err());
    }

    #[test]
    fn filenames_cannot_escape_the_upload_directory() {
        assert!(validate_filename("exam.pdf").is_ok());
        assert!(validate_filename("laudo médico 2026.pdf").is_ok());
        assert!(validate_filename("..").is_err());
        assert!(validate_filename("../../../../escaped.txt").is_err());
        assert!(validate_filename("dir/exam.pdf").is_err());
        assert!(validate_filename("dir\\exam.pdf").is_err());
        assert!(validate_filename("").is_err());
    }

    #[test]
    fn birth_dates_in_the_future_are_rejected() {
        let today = chrono::Utc::now().date_naive();
        assert!(validate_birth_date(&today).is_ok());
        assert!(validate_birth_date(&(today - chrono::Days::new(365))).is_ok());
        assert!(validate_birth_date(&(today + chrono::Days::new(1))).is_err());
    }

    #[test]
    fn state_and_label_lists_are_closed() {
        assert!(validate_state("PE").is_ok());
        assert!(validate_state("XX").is_err());
        assert!(validate_age_range_label("09 a 10 anos").is_ok());
        assert!(validate_age_range_label("9 a 10 anos").is_err());
    }
}
