use crate::utils::error::{Result, ScorecardError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScorecardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScorecardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScorecardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ScorecardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Team codes are the short badges shown next to the score (e.g. `ENG`).
pub fn validate_team_code(field_name: &str, code: &str) -> Result<()> {
    let len = code.chars().count();
    if !(2..=4).contains(&len) || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ScorecardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Team code must be 2 to 4 ASCII letters or digits".to_string(),
        });
    }
    Ok(())
}

pub fn validate_distinct(field_name: &str, values: &[&str]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.to_ascii_uppercase()) {
            return Err(ScorecardError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Values must be distinct".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("clock.tick_interval_ms", 1000u64, 1, 60_000).is_ok());
        assert!(validate_range("clock.tick_interval_ms", 0u64, 1, 60_000).is_err());
        assert!(validate_range("clock.tick_interval_ms", 60_001u64, 1, 60_000).is_err());
    }

    #[test]
    fn test_validate_team_code() {
        assert!(validate_team_code("home.code", "ENG").is_ok());
        assert!(validate_team_code("home.code", "U21").is_ok());
        assert!(validate_team_code("home.code", "E").is_err());
        assert!(validate_team_code("home.code", "ENGLAND").is_err());
        assert!(validate_team_code("home.code", "EN-G").is_err());
    }

    #[test]
    fn test_validate_distinct_ignores_case() {
        assert!(validate_distinct("team codes", &["ENG", "GER"]).is_ok());
        assert!(validate_distinct("team codes", &["ENG", "eng"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("home.name", "England").is_ok());
        assert!(validate_non_empty_string("home.name", "   ").is_err());
    }
}
