//! Run command handler.
//!
//! Validates the effective configuration and hands the terminal to the TUI.

use crate::config::{AppConfig, TuiPreferences, Validatable};
use crate::tui::{run_tui, App};
use anyhow::{bail, Context, Result};

/// Pick the theme: an explicit choice, then the saved preference, then config.
#[must_use]
pub fn resolve_theme(explicit: Option<&str>, config: &AppConfig) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| TuiPreferences::load().map(|p| p.theme))
        .unwrap_or_else(|| config.tui.theme.clone())
}

/// Reject configurations the TUI cannot run with.
pub fn check_config(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    for error in &errors {
        tracing::error!(field = %error.field, "{}", error.message);
    }
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    bail!("invalid configuration:\n  {}", details.join("\n  "))
}

/// Run the interactive session until the user quits.
pub fn run_interactive(config: &AppConfig, theme: Option<&str>) -> Result<()> {
    check_config(config)?;

    let theme = resolve_theme(theme, config);
    tracing::debug!(theme = %theme, tick_ms = config.timer.tick_interval_ms, "Starting TUI");

    let mut app = App::from_config(config);
    run_tui(&mut app, &theme, config.tui.tick_rate_ms).context("terminal UI failed")?;

    tracing::info!(
        completed_sessions = app.session().completed_sessions(),
        "Session ended"
    );
    Ok(())
}
