//! Configuration validation for reactivate.
//!
//! Provides validation traits and implementations for all configuration types.

use super::defaults::THEME_NAMES;
use super::types::{AppConfig, AssessmentConfig, TimerConfig, TuiConfig};
use crate::model::{Catalog, Intensity};
use std::collections::HashSet;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.assessment.validate());
        errors.extend(self.catalog.validate());
        errors.extend(self.timer.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for AssessmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let value = i64::from(self.default_intensity);
        if Intensity::new(value).is_ok() {
            Vec::new()
        } else {
            vec![ConfigError::new(
                "assessment.default_intensity",
                format!(
                    "Intensity must be between {} and {}, got {}",
                    Intensity::MIN,
                    Intensity::MAX,
                    self.default_intensity
                ),
            )]
        }
    }
}

impl Validatable for Catalog {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_options(&mut errors, "catalog.body_areas", &self.body_areas);
        check_options(&mut errors, "catalog.equipment", &self.equipment);
        errors
    }
}

fn check_options(errors: &mut Vec<ConfigError>, field: &str, options: &[String]) {
    if options.is_empty() {
        errors.push(ConfigError::new(field, "At least one option is required"));
        return;
    }

    let mut seen = HashSet::new();
    for option in options {
        if option.trim().is_empty() {
            errors.push(ConfigError::new(field, "Options must not be blank"));
        } else if !seen.insert(option.to_lowercase()) {
            errors.push(ConfigError::new(field, format!("Duplicate option '{option}'")));
        }
    }
}

impl Validatable for TimerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.tick_interval_ms == 0 {
            vec![ConfigError::new(
                "timer.tick_interval_ms",
                "Tick interval must be greater than 0",
            )]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !THEME_NAMES.contains(&self.theme.to_lowercase().as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            ));
        }
        if self.tick_rate_ms == 0 {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                "Tick rate must be greater than 0",
            ));
        }
        errors
    }
}
