//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::AppConfig;
use crate::calculator::MAX_PRECISION;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// This function checks for:
/// - Precision beyond what an `f64` can represent
/// - Precision of zero, which turns every result into an integer
/// - An empty interactive prompt
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if config.precision > MAX_PRECISION {
        warnings.push(ValidationWarning {
            field: "precision".to_string(),
            message: format!(
                "Precision {} exceeds maximum ({}). It will be clamped.",
                config.precision, MAX_PRECISION
            ),
        });
    } else if config.precision == 0 {
        warnings.push(ValidationWarning {
            field: "precision".to_string(),
            message: "Precision 0 rounds every result to an integer.".to_string(),
        });
    }

    if config.prompt.is_empty() {
        warnings.push(ValidationWarning {
            field: "prompt".to_string(),
            message: "Prompt is empty. Input lines will not be marked.".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = AppConfig::default();
        let warnings = validate_config(&config);
        assert!(warnings.is_empty(), "Warnings: {:?}", warnings);
    }

    #[test]
    fn test_validate_precision_too_large() {
        let config = AppConfig {
            precision: 20,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(
            warnings
                .iter()
                .any(|w| w.field == "precision" && w.message.contains("clamped"))
        );
    }

    #[test]
    fn test_validate_zero_precision() {
        let config = AppConfig {
            precision: 0,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "precision"));
    }

    #[test]
    fn test_validate_empty_prompt() {
        let config = AppConfig {
            prompt: String::new(),
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "prompt"));
    }
}
