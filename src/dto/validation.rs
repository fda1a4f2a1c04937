//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::state::daily::parse_date;

/// Validates that a value still has content once surrounding whitespace is trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("value must not be blank".into());
        return Err(err);
    }

    Ok(())
}

/// Validates a calendar day key in `YYYY-MM-DD` form.
///
/// Zero-padding is required and impossible dates are rejected.
pub fn validate_date_key(value: &str) -> Result<(), ValidationError> {
    if parse_date(value).is_none() {
        let mut err = ValidationError::new("date_format");
        err.message = Some(format!("`{value}` is not a valid YYYY-MM-DD date").into());
        return Err(err);
    }

    Ok(())
}

/// Validates a 24-hour clock time in `HH:MM` form.
pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    let valid = match value.split_once(':') {
        Some((hours, minutes)) => {
            matches!((two_digits(hours), two_digits(minutes)), (Some(h), Some(m)) if h < 24 && m < 60)
        }
        None => false,
    };

    if !valid {
        let mut err = ValidationError::new("time_format");
        err.message = Some(format!("`{value}` is not a valid HH:MM time").into());
        return Err(err);
    }

    Ok(())
}

fn two_digits(value: &str) -> Option<u8> {
    if value.len() == 2 && value.chars().all(|c| c.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("TeamHub").is_ok());
        assert!(validate_not_blank("  x  ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_validate_date_key_valid() {
        assert!(validate_date_key("2025-01-01").is_ok());
        assert!(validate_date_key("2024-02-29").is_ok()); // leap day
    }

    #[test]
    fn test_validate_date_key_invalid() {
        assert!(validate_date_key("2025-13-01").is_err()); // month out of range
        assert!(validate_date_key("2025-02-30").is_err()); // impossible day
        assert!(validate_date_key("2025-1-01").is_err()); // missing zero padding
        assert!(validate_date_key("01-01-2025").is_err()); // wrong ordering
        assert!(validate_date_key("").is_err());
    }

    #[test]
    fn test_validate_clock_time_valid() {
        assert!(validate_clock_time("00:00").is_ok());
        assert!(validate_clock_time("09:30").is_ok());
        assert!(validate_clock_time("23:59").is_ok());
    }

    #[test]
    fn test_validate_clock_time_invalid() {
        assert!(validate_clock_time("24:00").is_err()); // hour out of range
        assert!(validate_clock_time("12:60").is_err()); // minute out of range
        assert!(validate_clock_time("9:30").is_err()); // missing zero padding
        assert!(validate_clock_time("+1:30").is_err()); // signed digits
        assert!(validate_clock_time("0930").is_err()); // missing separator
        assert!(validate_clock_time("").is_err());
    }
}
