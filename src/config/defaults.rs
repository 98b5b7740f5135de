//! Default values for reactivate configuration.

/// Starting position of the intensity slider.
pub const DEFAULT_INTENSITY: u8 = 7;

/// One displayed timer second.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Terminal event poll interval.
pub const DEFAULT_UI_TICK_RATE_MS: u64 = 250;

/// Color theme used when neither config nor preferences name one.
pub const DEFAULT_THEME: &str = "dark";

/// Theme names accepted in config files.
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];
