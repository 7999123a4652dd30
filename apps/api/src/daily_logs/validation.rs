use chrono::NaiveDate;

use crate::errors::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn validate_user_id(user_id: &str) -> Result<(), AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    Ok(())
}

/// Parses a canonical `YYYY-MM-DD` date.
///
/// Rejects impossible dates (`2025-02-30`) and non-canonical spellings
/// (`2025-3-1`), since the string form is the logical key.
pub fn parse_log_date(raw: &str) -> Result<NaiveDate, AppError> {
    let invalid = || AppError::Validation(format!("'{raw}' is not a valid YYYY-MM-DD date"));
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(DATE_FORMAT).to_string() != raw {
        return Err(invalid());
    }
    Ok(date)
}

/// Parses a 4-digit year such as `"2025"`.
pub fn parse_year(raw: &str) -> Result<i32, AppError> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(format!(
            "'{raw}' is not a 4-digit year"
        )));
    }
    raw.parse::<i32>()
        .map_err(|_| AppError::Validation(format!("'{raw}' is not a 4-digit year")))
}

pub fn validate_score(score: i32) -> Result<(), AppError> {
    if !(0..=100).contains(&score) {
        return Err(AppError::Validation(format!(
            "score must be between 0 and 100, got {score}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_date_parses() {
        let date = parse_log_date("2025-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_impossible_date_rejected() {
        assert!(parse_log_date("2025-02-30").is_err());
        assert!(parse_log_date("2025-13-01").is_err());
    }

    #[test]
    fn test_non_canonical_date_rejected() {
        assert!(parse_log_date("2025-3-1").is_err());
        assert!(parse_log_date("03/01/2025").is_err());
        assert!(parse_log_date(" 2025-03-01").is_err());
    }

    #[test]
    fn test_leap_day() {
        assert!(parse_log_date("2024-02-29").is_ok());
        assert!(parse_log_date("2025-02-29").is_err());
    }

    #[test]
    fn test_year_parsing() {
        assert_eq!(parse_year("2025").unwrap(), 2025);
        assert!(parse_year("25").is_err());
        assert!(parse_year("20250").is_err());
        assert!(parse_year("20a5").is_err());
        assert!(parse_year("+202").is_err());
    }

    #[test]
    fn test_blank_user_rejected() {
        assert!(validate_user_id("   ").is_err());
        assert!(validate_user_id("u1").is_ok());
    }

    #[test]
    fn test_score_range() {
        assert!(validate_score(0).is_ok());
        assert!(validate_score(100).is_ok());
        assert!(validate_score(101).is_err());
        assert!(validate_score(-1).is_err());
    }
}
