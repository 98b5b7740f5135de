//! Terminal setup, the main loop, and top-level rendering.

use super::app::App;
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, set_theme, view_badge, FooterHints, Styles, Theme};
use super::views;
use super::widgets::{centered_rect, check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::session::{Stage, TickSource, View};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::{self, stdout};

/// Run the TUI application until the user quits.
pub fn run_tui<T: TickSource>(app: &mut App<T>, theme: &str, tick_rate_ms: u64) -> io::Result<()> {
    set_theme(Theme::from_name(theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate_ms);
    let result = event_loop(&mut terminal, app, &events);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend, T: TickSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<T>,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            tracing::debug!(
                completed_sessions = app.session().completed_sessions(),
                "Leaving TUI"
            );
            return Ok(());
        }
    }
}

/// Draw one frame for the current app state.
pub fn render<T: TickSource>(frame: &mut Frame, app: &App<T>) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let footer_height = u16::from(app.show_footer || app.status.has_message());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Header
            Constraint::Min(10),               // Content
            Constraint::Length(footer_height), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    let session = app.session();
    match session.stage() {
        Stage::Landing => views::render_landing(frame, chunks[1]),
        Stage::Onboarding => views::render_onboarding(
            frame,
            chunks[1],
            session.assessment(),
            app.catalog(),
            app.focused_item(),
        ),
        Stage::Dashboard { .. } => views::render_dashboard(frame, chunks[1], session),
        Stage::Completion { plan } => views::render_completion(frame, chunks[1], plan),
    }

    if footer_height > 0 {
        render_footer(frame, chunks[2], app);
    }

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header<T: TickSource>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let session = app.session();
    let view = session.view();

    let mut left = vec![
        Span::styled(" ⚡ ReActivate ", Styles::brand()),
        view_badge(view.name()),
    ];
    if let Some(plan) = session.plan() {
        left.push(Span::styled(format!("  {}", plan.title), Styles::text_muted()));
    }

    let right = if view == View::Landing {
        Line::from(Span::styled("Get Started Free [Enter] ", Styles::shortcut_key()))
    } else {
        Line::from(vec![
            Span::styled("🏆 ", Style::default().fg(colors().accent)),
            Span::styled(
                format!("{} sessions completed ", session.completed_sessions()),
                Styles::text_muted(),
            ),
        ])
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(Line::from(left)), inner);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), inner);
}

fn render_footer<T: TickSource>(frame: &mut Frame, area: Rect, app: &App<T>) {
    // Show status message if set, otherwise show view-specific hints
    if let Some(msg) = app.status.peek() {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.to_string(), Style::default().fg(colors().accent).bold()),
        ]);
        let footer = Paragraph::new(status_line).alignment(Alignment::Center);
        frame.render_widget(footer, area);
        return;
    }

    let running = app.session().timer().is_running();
    let hints = FooterHints::for_view(app.view().name(), running);
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints))).style(Styles::status_bar());
    frame.render_widget(footer, area);
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<14}"), Styles::shortcut_key()),
        Span::styled(desc, Styles::text()),
    ])
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(65, 85, area);
    frame.render_widget(Clear, popup_area);

    let section = |title: &'static str| Line::styled(title, Styles::section_title());
    let help_text = vec![
        Line::styled(
            "━━━ Keyboard Shortcuts ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        section("Global"),
        help_line("q / Ctrl+C", "Quit"),
        help_line("?", "Toggle this help"),
        help_line("T", "Cycle theme (dark, light, high-contrast)"),
        Line::from(""),
        section("Landing"),
        help_line("Enter / g", "Get started"),
        help_line("w", "Watch demo"),
        Line::from(""),
        section("Assessment"),
        help_line("↑↓ / jk", "Move between questions"),
        help_line("Space / Enter", "Toggle the focused answer"),
        help_line("←→ / hl", "Adjust training intensity"),
        help_line("1-9, 0", "Set intensity (slider focused, 0 = 10)"),
        help_line("g", "Generate my recovery plan"),
        Line::from(""),
        section("Plan"),
        help_line("s", "Start the current exercise"),
        help_line("p / c", "Pause or complete (while timing)"),
        help_line("t / n", "Plan tomorrow / new assessment"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(Styles::heading())
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(help, popup_area);
}
