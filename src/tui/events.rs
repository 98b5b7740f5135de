//! Event polling and key dispatch for the TUI.

use super::app::{App, OnboardingItem};
use crate::session::{Action, TickSource, View};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick (drives the status line and timer)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_UI_TICK_RATE_MS)
    }
}

/// Handle key events and update app state
pub fn handle_key_event<T: TickSource>(app: &mut App<T>, key: KeyEvent) {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q')) {
            app.toggle_help();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('T') => app.cycle_theme(),
        _ => match app.view() {
            View::Landing => handle_landing_key(app, key),
            View::Onboarding => handle_onboarding_key(app, key),
            View::Dashboard => handle_dashboard_key(app, key),
            View::Completion => handle_completion_key(app, key),
        },
    }
}

fn handle_landing_key<T: TickSource>(app: &mut App<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('g') => app.dispatch(Action::Start),
        KeyCode::Char('w') => {
            app.set_status_message("Demo video is not available in the terminal");
        }
        _ => {}
    }
}

fn handle_onboarding_key<T: TickSource>(app: &mut App<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.focus_next(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Left | KeyCode::Char('h') => app.dispatch(Action::AdjustIntensity(-1)),
        KeyCode::Right | KeyCode::Char('l') => app.dispatch(Action::AdjustIntensity(1)),
        KeyCode::Char(' ') | KeyCode::Enter => app.activate_focused(),
        KeyCode::Char('g') => app.dispatch(Action::Submit),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if app.focused_item() == Some(OnboardingItem::Intensity) {
                if let Some(digit) = c.to_digit(10) {
                    app.set_intensity_digit(digit);
                }
            }
        }
        _ => {}
    }
}

fn handle_dashboard_key<T: TickSource>(app: &mut App<T>, key: KeyEvent) {
    let running = app.session().timer().is_running();
    match key.code {
        KeyCode::Char('s') if !running => app.dispatch(Action::StartExercise),
        KeyCode::Char('p') if running => app.dispatch(Action::PauseExercise),
        KeyCode::Char('c') if running => app.dispatch(Action::CompleteExercise),
        _ => {}
    }
}

fn handle_completion_key<T: TickSource>(app: &mut App<T>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') => app.dispatch(Action::PlanTomorrow),
        KeyCode::Char('n') => app.dispatch(Action::NewAssessment),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;
    use crate::session::{ManualTicker, Session};

    fn press(app: &mut App<ManualTicker>, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App<ManualTicker> {
        App::new(Session::default(), Catalog::default(), ManualTicker::new())
    }

    #[test]
    fn test_full_keyboard_walkthrough() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view(), View::Onboarding);

        // Toggle "Legs", move right on the slider, generate
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.view(), View::Dashboard);
        let plan = app.session().plan().cloned().unwrap();
        assert_eq!(plan.intensity.value(), 8);
        assert_eq!(plan.pain_focus, vec!["Legs".to_string()]);

        for _ in 0..plan.exercise_count() {
            press(&mut app, KeyCode::Char('s'));
            press(&mut app, KeyCode::Char('c'));
        }
        assert_eq!(app.view(), View::Completion);
        assert_eq!(app.session().completed_sessions(), 1);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.view(), View::Dashboard);
    }

    #[test]
    fn test_complete_requires_running_timer() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('g'));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session().current_exercise_index(), 0);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('p'));
        assert!(!app.session().timer().is_running());
        assert!(!app.ticker().is_active());
    }

    #[test]
    fn test_digits_only_on_slider() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session().assessment().intensity.value(), 7);

        while app.focused_item() != Some(OnboardingItem::Intensity) {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session().assessment().intensity.value(), 3);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view(), View::Landing);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_watch_demo_sets_status() {
        let mut app = app();
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.view(), View::Landing);
        assert!(app.status.has_message());
    }
}
