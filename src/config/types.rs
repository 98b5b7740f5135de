//! Configuration types for reactivate.

use super::defaults::{
    DEFAULT_INTENSITY, DEFAULT_THEME, DEFAULT_TICK_INTERVAL_MS, DEFAULT_UI_TICK_RATE_MS,
};
use crate::error::ReactivateError;
use crate::model::{Assessment, Catalog, Intensity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Onboarding defaults
    pub assessment: AssessmentConfig,
    /// Body areas and equipment offered during onboarding
    pub catalog: Catalog,
    /// Exercise timer settings
    pub timer: TimerConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// The assessment a new session starts with.
    #[must_use]
    pub fn initial_assessment(&self) -> Assessment {
        Assessment::with_intensity(self.assessment.intensity())
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the slider's starting position.
    pub const fn default_intensity(mut self, intensity: u8) -> Self {
        self.config.assessment.default_intensity = intensity;
        self
    }

    /// Set the color theme.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    /// Set the exercise timer interval.
    pub const fn tick_interval_ms(mut self, ms: u64) -> Self {
        self.config.timer.tick_interval_ms = ms;
        self
    }

    /// Replace the body area options.
    pub fn body_areas(mut self, areas: Vec<String>) -> Self {
        self.config.catalog.body_areas = areas;
        self
    }

    /// Replace the equipment options.
    pub fn equipment(mut self, equipment: Vec<String>) -> Self {
        self.config.catalog.equipment = equipment;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Onboarding defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Starting position of the training intensity slider (1-10)
    #[schemars(range(min = 1, max = 10))]
    pub default_intensity: u8,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            default_intensity: DEFAULT_INTENSITY,
        }
    }
}

impl AssessmentConfig {
    /// Starting intensity, clamped onto the scale.
    #[must_use]
    pub fn intensity(&self) -> Intensity {
        Intensity::saturating(i64::from(self.default_intensity))
    }
}

/// Exercise timer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TimerConfig {
    /// Milliseconds per timer tick (one displayed second)
    #[schemars(range(min = 1))]
    pub tick_interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl TimerConfig {
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// TUI-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Terminal event poll interval in milliseconds
    #[schemars(range(min = 1))]
    pub tick_rate_ms: u64,
    /// Show the key hint footer
    pub show_footer: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            tick_rate_ms: DEFAULT_UI_TICK_RATE_MS,
            show_footer: true,
        }
    }
}

// ============================================================================
// Persisted TUI preferences
// ============================================================================

/// Preferences remembered between runs (currently only the theme).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reactivate").join("preferences.json"))
    }

    /// Load preferences from disk, or return `None` if absent or unreadable.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> crate::Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save preferences to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ReactivateError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ReactivateError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .default_intensity(3)
            .theme("light")
            .tick_interval_ms(250)
            .body_areas(vec!["Hips".to_string()])
            .build();
        assert_eq!(config.assessment.default_intensity, 3);
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.timer.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.catalog.body_areas, vec!["Hips"]);
    }

    #[test]
    fn test_initial_assessment_uses_default_intensity() {
        let config = AppConfig::builder().default_intensity(4).build();
        let assessment = config.initial_assessment();
        assert_eq!(assessment.intensity.value(), 4);
        assert!(assessment.pain_areas.is_empty());
    }

    #[test]
    fn test_intensity_clamped_from_config() {
        let config = AppConfig::builder().default_intensity(42).build();
        assert_eq!(config.assessment.intensity().value(), 10);
    }

    #[test]
    fn test_preferences_save_creates_parent_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("reactivate").join("preferences.json");
        let prefs = TuiPreferences {
            theme: "high-contrast".to_string(),
        };

        prefs.save_to(&path).unwrap();
        let saved: TuiPreferences =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, prefs);
    }

    #[test]
    fn test_preferences_save_reports_path_on_failure() {
        let tmp = tempfile::TempDir::new().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("preferences.json");

        let err = TuiPreferences::default().save_to(&path).unwrap_err();
        match err {
            ReactivateError::Io { path: failed, .. } => assert_eq!(failed, blocker),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
