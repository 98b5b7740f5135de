//! Session complete screen.

use crate::model::RecoveryPlan;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{centered_rect, panel};
use ratatui::{
    prelude::*,
    widgets::{Clear, Paragraph},
};

pub fn render_completion(frame: &mut Frame, area: Rect, plan: &RecoveryPlan) {
    let scheme = colors();
    let card_area = centered_rect(60, 80, area);

    let lines = vec![
        Line::from(""),
        Line::styled("✔", Style::default().fg(scheme.success).bold()),
        Line::styled("Session Complete!", Styles::heading()),
        Line::styled(
            "Great job on completing your recovery session",
            Styles::text_muted(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Duration ", Styles::text_muted()),
            Span::styled(plan.total_duration.clone(), Styles::value()),
            Span::styled("   Exercises ", Styles::text_muted()),
            Span::styled(plan.exercise_count().to_string(), Styles::value()),
        ]),
        Line::from(""),
        Line::styled(
            " [t] Plan Tomorrow's Recovery ",
            Style::default()
                .fg(scheme.badge_fg_light)
                .bg(scheme.secondary)
                .bold(),
        ),
        Line::from(""),
        Line::styled(" [n] New Assessment ", Styles::text().bold()),
    ];

    let card = Paragraph::new(lines)
        .block(panel("", true).border_style(Style::default().fg(scheme.success)))
        .alignment(Alignment::Center);
    frame.render_widget(Clear, card_area);
    frame.render_widget(card, card_area);
}
