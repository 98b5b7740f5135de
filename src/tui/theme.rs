//! Centralized theme and color scheme for the TUI.
//!
//! This module provides consistent styling across all screens.

use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Brand
    pub brand: Color,
    pub brand_alt: Color,

    // Exercise progress
    pub done: Color,
    pub current: Color,
    pub pending: Color,

    // Chips
    pub pain_chip: Color,
    pub equipment_chip: Color,

    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            brand: Color::Yellow,
            brand_alt: Color::Magenta,

            done: Color::Green,
            current: Color::Blue,
            pending: Color::DarkGray,

            pain_chip: Color::LightRed,
            equipment_chip: Color::LightBlue,

            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(60, 60, 80),

            success: Color::Green,
            warning: Color::Rgb(255, 165, 0),
            error: Color::Red,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            brand: Color::Rgb(37, 99, 235),
            brand_alt: Color::Rgb(147, 51, 234),

            done: Color::Rgb(0, 128, 0),
            current: Color::Rgb(37, 99, 235),
            pending: Color::Rgb(160, 160, 160),

            pain_chip: Color::Rgb(185, 28, 28),
            equipment_chip: Color::Rgb(29, 78, 216),

            primary: Color::Rgb(0, 100, 150),
            secondary: Color::Rgb(0, 0, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(200, 110, 0),
            error: Color::Rgb(200, 0, 0),

            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            brand: Color::LightYellow,
            brand_alt: Color::LightMagenta,

            done: Color::LightGreen,
            current: Color::LightCyan,
            pending: Color::Gray,

            pain_chip: Color::LightRed,
            equipment_chip: Color::LightBlue,

            primary: Color::LightCyan,
            secondary: Color::LightBlue,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(50, 50, 80),

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Brand wordmark style
    pub fn brand() -> Style {
        Style::default().fg(colors().brand).bold()
    }

    /// Screen heading style
    pub fn heading() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Selection style (for the focused row)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Border style (focused)
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    /// Warning style
    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render a label on a colored background.
pub fn chip(label: &str, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {label} "),
        Style::default().fg(colors().badge_fg_dark).bg(bg).bold(),
    )
}

/// Render a screen badge for the header.
pub fn view_badge(view: &str) -> Span<'static> {
    let scheme = colors();
    let color = match view {
        "landing" => scheme.brand,
        "onboarding" => scheme.secondary,
        "dashboard" => scheme.primary,
        "completion" => scheme.success,
        _ => scheme.muted,
    };
    Span::styled(
        format!(" {} ", view.to_uppercase()),
        Style::default().fg(scheme.badge_fg_dark).bg(color).bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Screen-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Get hints for a screen.
    ///
    /// `running` selects the dashboard hints shown while an exercise is timed.
    pub fn for_view(view: &str, running: bool) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();

        match view {
            "landing" => {
                hints.insert(0, ("Enter", "get started"));
                hints.insert(1, ("w", "watch demo"));
            }
            "onboarding" => {
                hints.insert(0, ("↑↓/jk", "move"));
                hints.insert(1, ("Space", "toggle"));
                hints.insert(2, ("←→/hl", "intensity"));
                hints.insert(3, ("g", "generate plan"));
            }
            "dashboard" if running => {
                hints.insert(0, ("p", "pause"));
                hints.insert(1, ("c", "complete"));
            }
            "dashboard" => {
                hints.insert(0, ("s", "start exercise"));
            }
            "completion" => {
                hints.insert(0, ("t", "plan tomorrow"));
                hints.insert(1, ("n", "new assessment"));
            }
            _ => {}
        }

        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![("T", "theme"), ("?", "help"), ("q", "quit")]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
