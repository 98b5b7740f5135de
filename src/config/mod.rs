//! Configuration module for reactivate.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI overrides applied on top of the file
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use reactivate::config::{AppConfig, load_or_default};
//!
//! let config = AppConfig::builder()
//!     .default_intensity(5)
//!     .theme("light")
//!     .build();
//!
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.reactivate.yaml` file in your working directory or
//! `~/.config/reactivate/`:
//!
//! ```yaml
//! assessment:
//!   default_intensity: 5
//! tui:
//!   theme: light
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_INTENSITY, DEFAULT_THEME, DEFAULT_TICK_INTERVAL_MS, DEFAULT_UI_TICK_RATE_MS,
    THEME_NAMES,
};
pub use types::{
    AppConfig, AppConfigBuilder, AssessmentConfig, TimerConfig, TuiConfig, TuiPreferences,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    search_paths, ConfigFileError, ConfigOverrides, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.reactivate.yaml`.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_names_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"assessment\""));
        assert!(schema.contains("\"catalog\""));
        assert!(schema.contains("\"tick_interval_ms\""));
    }
}
