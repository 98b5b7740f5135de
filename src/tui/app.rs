//! Application state for the ReActivate TUI.
//!
//! `App` wraps the pure [`Session`] with the things only an interactive
//! terminal needs: the onboarding cursor, overlays, a status line, and the
//! tick source driving the exercise timer.

use super::state::{ListNavigation, ListState};
use super::status::StatusMessage;
use super::theme::toggle_theme;
use crate::config::{AppConfig, TuiPreferences};
use crate::model::{Catalog, Intensity};
use crate::session::{Action, IntervalTicker, Session, TickSource, View};
use std::time::Duration;

const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// One focusable row on the onboarding screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingItem {
    /// Index into `Catalog::body_areas`
    PainArea(usize),
    /// The training intensity slider
    Intensity,
    /// Index into `Catalog::equipment`
    Equipment(usize),
    /// "Generate My Recovery Plan"
    Submit,
}

/// Focus order of the onboarding screen for a catalog.
pub fn onboarding_items(catalog: &Catalog) -> Vec<OnboardingItem> {
    let mut items: Vec<_> = (0..catalog.body_areas.len())
        .map(OnboardingItem::PainArea)
        .collect();
    items.push(OnboardingItem::Intensity);
    items.extend((0..catalog.equipment.len()).map(OnboardingItem::Equipment));
    items.push(OnboardingItem::Submit);
    items
}

/// Main application state.
pub struct App<T: TickSource = Box<dyn TickSource>> {
    session: Session,
    catalog: Catalog,
    items: Vec<OnboardingItem>,
    ticker: T,
    /// Onboarding focus
    pub cursor: ListState,
    pub status: StatusMessage,
    pub show_help: bool,
    pub show_footer: bool,
    pub should_quit: bool,
    /// UI frame counter
    pub tick: u64,
}

impl App<Box<dyn TickSource>> {
    /// Build the app from configuration with a wall-clock ticker.
    pub fn from_config(config: &AppConfig) -> Self {
        let ticker: Box<dyn TickSource> =
            Box::new(IntervalTicker::new(config.timer.tick_interval()));
        let mut app = Self::new(
            Session::new(config.initial_assessment()),
            config.catalog.clone(),
            ticker,
        );
        app.show_footer = config.tui.show_footer;
        app
    }
}

impl<T: TickSource> App<T> {
    /// Create an app around an existing session.
    pub fn new(session: Session, catalog: Catalog, ticker: T) -> Self {
        let items = onboarding_items(&catalog);
        let mut app = Self {
            session,
            catalog,
            cursor: ListState::with_total(items.len()),
            items,
            ticker,
            status: StatusMessage::with_auto_clear(STATUS_TIMEOUT),
            show_help: false,
            show_footer: true,
            should_quit: false,
            tick: 0,
        };
        app.sync_ticker();
        app
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    pub fn view(&self) -> View {
        self.session.view()
    }

    /// Apply an action to the session and keep the tick source in step.
    pub fn dispatch(&mut self, action: Action) {
        let before = self.session.view();
        let session = std::mem::take(&mut self.session);
        self.session = session.apply(action);

        if self.session.view() == View::Onboarding && before != View::Onboarding {
            self.cursor.go_first();
        }
        self.sync_ticker();
    }

    /// The tick source runs exactly while the exercise timer does.
    fn sync_ticker(&mut self) {
        let running = self.session.timer().is_running();
        match (running, self.ticker.is_active()) {
            (true, false) => self.ticker.start(),
            (false, true) => self.ticker.stop(),
            _ => {}
        }
    }

    /// Advance one UI frame: expire the status line and feed timer ticks.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.status.expire();
        let ticks = self.ticker.take_ticks();
        if ticks > 0 {
            self.dispatch(Action::Tick(ticks));
        }
    }

    // ------------------------------------------------------------------
    // Onboarding focus
    // ------------------------------------------------------------------

    pub fn onboarding_items(&self) -> &[OnboardingItem] {
        &self.items
    }

    pub fn focused_item(&self) -> Option<OnboardingItem> {
        self.items.get(self.cursor.selected()).copied()
    }

    pub fn focus_next(&mut self) {
        self.cursor.select_next();
    }

    pub fn focus_prev(&mut self) {
        self.cursor.select_prev();
    }

    /// Toggle or submit whatever the cursor is on.
    pub fn activate_focused(&mut self) {
        let action = match self.focused_item() {
            Some(OnboardingItem::PainArea(i)) => self
                .catalog
                .body_areas
                .get(i)
                .map(|area| Action::TogglePainArea(area.clone())),
            Some(OnboardingItem::Equipment(i)) => self
                .catalog
                .equipment
                .get(i)
                .map(|item| Action::ToggleEquipment(item.clone())),
            Some(OnboardingItem::Submit) => Some(Action::Submit),
            Some(OnboardingItem::Intensity) | None => None,
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Set intensity from a digit key; `0` means 10.
    pub fn set_intensity_digit(&mut self, digit: u32) {
        let value = if digit == 0 { 10 } else { i64::from(digit) };
        if let Ok(intensity) = Intensity::new(value) {
            self.dispatch(Action::SetIntensity(intensity));
        }
    }

    // ------------------------------------------------------------------
    // Chrome
    // ------------------------------------------------------------------

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Switch to the next color theme and remember it.
    pub fn cycle_theme(&mut self) {
        let name = toggle_theme();
        let prefs = TuiPreferences {
            theme: name.to_string(),
        };
        if let Err(e) = prefs.save() {
            tracing::warn!("Failed to save theme preference: {e}");
        }
        self.status.set(format!("Theme: {name}"));
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status.set(msg);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl<T: TickSource> Drop for App<T> {
    fn drop(&mut self) {
        // No periodic callback may outlive the screen that owns it.
        self.ticker.stop();
    }
}
