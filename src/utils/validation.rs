use crate::utils::error::{AnalysisError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
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
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_report_formats(field_name: &str, formats: &[String]) -> Result<()> {
    let allowed: HashSet<&str> = ["csv", "json"].into_iter().collect();

    for format in formats {
        if !allowed.contains(format.as_str()) {
            return Err(AnalysisError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: "Supported report formats: csv, json".to_string(),
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
        assert!(validate_range("altitude", 73.0, 0.0, 5000.0).is_ok());
        assert!(validate_range("altitude", -1.0, 0.0, 5000.0).is_err());
        assert!(validate_range("slope", 10.1, -10.0, 10.0).is_err());
        assert!(validate_range("temperature", -50.0, -50.0, 60.0).is_ok());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("altitude", 73.0).is_ok());
        assert!(validate_finite("altitude", f64::NAN).is_err());
        assert!(validate_finite("altitude", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_report_formats() {
        let formats = vec!["csv".to_string(), "json".to_string()];
        assert!(validate_report_formats("formats", &formats).is_ok());

        let invalid = vec!["xml".to_string()];
        assert!(validate_report_formats("formats", &invalid).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("table_path", "data/aeronaves.csv").is_ok());
        assert!(validate_path("table_path", "").is_err());
    }
}
