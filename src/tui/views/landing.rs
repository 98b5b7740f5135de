//! Landing page: hero, feature cards and headline stats.

use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::panel;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "◆",
        "AI-Powered Plans",
        "Personalized recovery protocols based on your data",
    ),
    ("▣", "Mobile-First", "Train anywhere with guided video sessions"),
    (
        "✚",
        "Injury Prevention",
        "Science-backed protocols to keep you healthy",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("25K+", "Active Athletes"),
    ("89%", "Injury Reduction"),
    ("$15", "Per Month"),
    ("4.9★", "App Rating"),
];

pub fn render_landing(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Hero
            Constraint::Length(6), // Features
            Constraint::Length(4), // Stats
            Constraint::Min(0),
        ])
        .split(area);

    render_hero(frame, chunks[0]);
    render_features(frame, chunks[1]);
    render_stats(frame, chunks[2]);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let lines = vec![
        Line::from(""),
        Line::styled("Recover Like a Pro", Styles::brand().add_modifier(Modifier::UNDERLINED)),
        Line::from(""),
        Line::styled(
            "AI-powered recovery plans tailored to your training, pain points, and available equipment.",
            Styles::text_muted(),
        ),
        Line::styled(
            "Join thousands of athletes optimizing their recovery.",
            Styles::text_muted(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " ▶ Start Your Recovery Journey [Enter] ",
                Style::default()
                    .fg(scheme.badge_fg_light)
                    .bg(scheme.secondary)
                    .bold(),
            ),
            Span::raw("   "),
            Span::styled(" Watch Demo [w] ", Style::default().fg(scheme.text).bold()),
        ]),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((icon, title, body), col) in FEATURES.iter().zip(cols.iter()) {
        let card = Paragraph::new(vec![
            Line::styled(format!("{icon} {title}"), Styles::heading()),
            Line::styled(*body, Styles::text_muted()),
        ])
        .block(panel("", false))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(card, *col);
    }
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let accents = [scheme.brand, scheme.secondary, scheme.success, scheme.brand_alt];

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (((value, label), accent), col) in STATS.iter().zip(accents).zip(cols.iter()) {
        let stat = Paragraph::new(vec![
            Line::styled(*value, Style::default().fg(accent).bold()),
            Line::styled(*label, Styles::text_muted()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(stat, *col);
    }
}
