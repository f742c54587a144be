use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{
    validate_index_range, validate_non_empty_string, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Input sizes for every drill. Sections missing from a TOML file keep
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    pub squares: SquaresConfig,
    pub reverse: ReverseConfig,
    pub merge_lists: MergeListsConfig,
    pub merge_dicts: MergeDictsConfig,
    pub intersect: IntersectConfig,
    pub words: WordsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquaresConfig {
    pub n: u64,
}

impl Default for SquaresConfig {
    fn default() -> Self {
        Self { n: 1000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseConfig {
    pub len: usize,
    pub start: usize,
    pub end: usize,
}

impl Default for ReverseConfig {
    fn default() -> Self {
        Self {
            len: 1000,
            start: 200,
            end: 400,
        }
    }
}

/// Left list is `1..=left_len`, right list continues from there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeListsConfig {
    pub left_len: u64,
    pub right_len: u64,
}

impl Default for MergeListsConfig {
    fn default() -> Self {
        Self {
            left_len: 500,
            right_len: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeDictsConfig {
    pub size: u64,
}

impl Default for MergeDictsConfig {
    fn default() -> Self {
        Self { size: 500 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectConfig {
    pub left_len: u64,
    pub right_start: u64,
    pub right_len: u64,
}

impl Default for IntersectConfig {
    fn default() -> Self {
        Self {
            left_len: 500,
            right_start: 100,
            right_len: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    pub words: Vec<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            words: ["apple", "banana", "apple", "orange", "banana", "banana"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl WorkloadConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading workload from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WorkloadConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for WorkloadConfig {
    fn validate(&self) -> Result<()> {
        validate_index_range("reverse", self.reverse.start, self.reverse.end, self.reverse.len)?;
        validate_positive_number("merge_dicts.size", self.merge_dicts.size, 1)?;
        validate_positive_number("intersect.left_len", self.intersect.left_len, 1)?;
        validate_positive_number("intersect.right_len", self.intersect.right_len, 1)?;
        for word in &self.words.words {
            validate_non_empty_string("words.words", word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WorkloadConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.squares.n, 1000);
        assert_eq!(config.words.words.len(), 6);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = WorkloadConfig::from_toml_str(
            r#"
            [squares]
            n = 10

            [reverse]
            start = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.squares.n, 10);
        assert_eq!(config.reverse.start, 0);
        assert_eq!(config.reverse.end, 400);
        assert_eq!(config.merge_lists, MergeListsConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            WorkloadConfig::from_toml_str("").unwrap(),
            WorkloadConfig::default()
        );
    }

    #[test]
    fn test_invalid_reverse_range_rejected() {
        let result = WorkloadConfig::from_toml_str(
            r#"
            [reverse]
            len = 10
            start = 3
            end = 10
            "#,
        );
        assert!(matches!(
            result,
            Err(DrillError::InvalidConfigValueError { ref field, .. }) if field == "reverse"
        ));
    }

    #[test]
    fn test_large_sizes_validate_without_truncation() {
        let result = WorkloadConfig::from_toml_str(
            r#"
            [merge_dicts]
            size = 4294967296

            [intersect]
            left_len = 4294967296
            right_len = 4294967296
            "#,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = WorkloadConfig::from_toml_str("[merge_dicts]\nsize = 0\n");
        assert!(matches!(
            result,
            Err(DrillError::InvalidConfigValueError { ref field, .. }) if field == "merge_dicts.size"
        ));
    }

    #[test]
    fn test_blank_word_rejected() {
        let result = WorkloadConfig::from_toml_str(
            r#"
            [words]
            words = ["apple", " "]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml_is_toml_error() {
        let result = WorkloadConfig::from_toml_str("[squares\nn = 1");
        assert!(matches!(result, Err(DrillError::TomlError(_))));
    }
}
