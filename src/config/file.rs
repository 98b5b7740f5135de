//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".reactivate.yaml",
    ".reactivate.yml",
    "reactivate.yaml",
    "reactivate.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/reactivate/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = find_git_root().as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = dirs::config_dir()
        .map(|dir| dir.join("reactivate"))
        .as_deref()
        .and_then(find_config_in_dir)
    {
        return Some(path);
    }

    dirs::home_dir().as_deref().and_then(find_config_in_dir)
}

/// Directories searched for a config file, in order.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|p| p.join("reactivate")),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

/// Settings given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub default_intensity: Option<u8>,
    pub theme: Option<String>,
    pub tick_interval_ms: Option<u64>,
    pub show_footer: Option<bool>,
}

impl AppConfig {
    /// Apply command-line settings on top of this config.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(intensity) = overrides.default_intensity {
            self.assessment.default_intensity = intensity;
        }
        if let Some(theme) = &overrides.theme {
            self.tui.theme.clone_from(theme);
        }
        if let Some(ms) = overrides.tick_interval_ms {
            self.timer.tick_interval_ms = ms;
        }
        if let Some(show) = overrides.show_footer {
            self.tui.show_footer = show;
        }
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# ReActivate Configuration File
# ==============================
#
# Place it at:
#   - .reactivate.yaml in the current directory or repository root
#   - ~/.config/reactivate/reactivate.yaml for global config
#
# CLI arguments always override file settings.

# Onboarding defaults
assessment:
  # Starting position of the training intensity slider (1-10)
  default_intensity: 7

# Options offered on the onboarding screen
catalog:
  body_areas:
    - Legs
    - Back
    - Shoulders
    - Arms
    - Core
    - Neck
  equipment:
    - Foam Roller
    - Resistance Bands
    - Massage Ball
    - Ice Bath
    - Heating Pad
    - Yoga Mat

# Exercise timer
timer:
  # Milliseconds per displayed second
  tick_interval_ms: 1000

# TUI configuration
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  # Terminal event poll interval in milliseconds
  tick_rate_ms: 250
  show_footer: true
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_INTENSITY, DEFAULT_THEME, DEFAULT_TICK_INTERVAL_MS};
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".reactivate.yaml");
        std::fs::write(&config_path, "assessment:\n  default_intensity: 3\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
assessment:
  default_intensity: 9
catalog:
  equipment:
    - Kettlebell
tui:
  theme: light
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.assessment.default_intensity, 9);
        assert_eq!(config.catalog.equipment, vec!["Kettlebell"]);
        // Unspecified lists keep their defaults
        assert_eq!(config.catalog.body_areas.len(), 6);
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.timer.tick_interval_ms, 1000);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/reactivate.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_bad_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "assessment: [not, a, map]\n").unwrap();
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_apply_overrides_only_touches_given_fields() {
        let mut config = AppConfig::builder().theme("light").tick_interval_ms(500).build();
        config.apply_overrides(&ConfigOverrides {
            default_intensity: Some(2),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.assessment.default_intensity, 2);
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.timer.tick_interval_ms, 500);
        assert!(config.tui.show_footer);
    }

    #[test]
    fn test_override_equal_to_default_still_wins() {
        let mut config = AppConfig::builder()
            .default_intensity(3)
            .tick_interval_ms(200)
            .theme("high-contrast")
            .build();
        config.apply_overrides(&ConfigOverrides {
            default_intensity: Some(DEFAULT_INTENSITY),
            theme: Some(DEFAULT_THEME.to_string()),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
            show_footer: Some(true),
        });

        assert_eq!(config.assessment.default_intensity, DEFAULT_INTENSITY);
        assert_eq!(config.tui.theme, DEFAULT_THEME);
        assert_eq!(config.timer.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_full_example_config_parses() {
        let config: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "tui:\n  theme: dark\n").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
