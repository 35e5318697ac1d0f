use crate::utils::error::{AllocError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Required-field check used by the allocation path. Whitespace-only input
/// counts as empty.
pub fn require_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AllocError::IncompleteInput {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AllocError::ConfigError {
            field: field_name.to_string(),
            message: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AllocError::ConfigError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("name", "Asha").is_ok());
        assert!(require_non_empty("name", "").is_err());
        assert!(require_non_empty("name", "   ").is_err());
    }

    #[test]
    fn test_require_non_empty_reports_field() {
        let err = require_non_empty("course", " ").unwrap_err();
        assert!(matches!(err, AllocError::IncompleteInput { field } if field == "course"));
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("capacity", 50, 1).is_ok());
        assert!(validate_positive_number("capacity", 0, 1).is_err());
    }
}
