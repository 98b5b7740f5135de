//! Interactive terminal UI using ratatui.
//!
//! The TUI is a thin shell around [`crate::session::Session`]:
//!
//! - [`App`] owns the session, the onboarding cursor, overlays, and the
//!   [`TickSource`](crate::session::TickSource) feeding the exercise timer
//! - [`events`] turns key presses into session actions per screen
//! - [`render`] is a pure function of `App`, drawing one of the four
//!   screens plus the header, footer hints and help overlay
//!
//! The tick source is started and stopped after every action so it runs
//! exactly while the exercise timer does, and is stopped when `App` drops.

mod app;
pub mod events;
pub mod state;
mod status;
pub mod theme;
mod ui;
mod views;
pub mod widgets;

pub use app::{onboarding_items, App, OnboardingItem};
pub use events::{handle_key_event, Event, EventHandler};
pub use state::{ListNavigation, ListState};
pub use status::StatusMessage;
pub use theme::{
    colors, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};
pub use ui::{render, run_tui};
