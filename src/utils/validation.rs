use crate::utils::error::{DrillError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Checks that `start..=end` addresses elements of a list of length `len`.
pub fn validate_index_range(field_name: &str, start: usize, end: usize, len: usize) -> Result<()> {
    if start > end {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", start, end),
            reason: "Range start must not exceed range end".to_string(),
        });
    }
    if end >= len {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", start, end),
            reason: format!("Range end must be below list length {}", len),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("squares.n", 5, 1).is_ok());
        assert!(validate_positive_number("squares.n", 0, 1).is_err());
        assert!(validate_positive_number("merge_dicts.size", 1u64 << 32, 1).is_ok());
    }

    #[test]
    fn test_validate_index_range() {
        assert!(validate_index_range("reverse", 200, 400, 1000).is_ok());
        assert!(validate_index_range("reverse", 0, 0, 1).is_ok());
        assert!(validate_index_range("reverse", 5, 4, 10).is_err());
        assert!(validate_index_range("reverse", 0, 10, 10).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("words", "apple").is_ok());
        assert!(validate_non_empty_string("words", "   ").is_err());
    }
}
