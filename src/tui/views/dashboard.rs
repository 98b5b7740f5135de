//! Dashboard: insight card, the exercise list with timer, progress sidebar.

use crate::model::RecoveryPlan;
use crate::session::{ExerciseTimer, Session};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{chip_line, panel};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

// Fixed demo figures shown on the progress card.
const STREAK: &str = "5 days";
const PAIN_REDUCTION: &str = "-23%";

pub fn render_dashboard(frame: &mut Frame, area: Rect, session: &Session) {
    let Some(plan) = session.plan() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_insight(frame, rows[0], plan);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(rows[1]);

    render_exercises(
        frame,
        cols[0],
        plan,
        session.current_exercise_index(),
        session.timer(),
    );
    render_sidebar(frame, cols[1], plan, session.completed_sessions());
}

fn render_insight(frame: &mut Frame, area: Rect, plan: &RecoveryPlan) {
    let insight = Paragraph::new(Line::styled(plan.insight.clone(), Styles::text()))
        .block(panel("◆ AI Recovery Insight", false).border_style(Style::default().fg(colors().brand_alt)))
        .wrap(Wrap { trim: true });
    frame.render_widget(insight, area);
}

fn render_exercises(
    frame: &mut Frame,
    area: Rect,
    plan: &RecoveryPlan,
    current: usize,
    timer: &ExerciseTimer,
) {
    let scheme = colors();
    let mut lines = Vec::new();

    for (idx, exercise) in plan.exercises.iter().enumerate() {
        let (marker, color) = if idx < current {
            ("✓", scheme.done)
        } else if idx == current {
            ("●", scheme.current)
        } else {
            ("○", scheme.pending)
        };

        let name_style = if idx == current {
            Style::default().fg(scheme.current).bold()
        } else {
            Styles::value()
        };

        let mut spans = vec![
            Span::styled(format!(" {marker} "), Style::default().fg(color).bold()),
            Span::styled(exercise.name.clone(), name_style),
            Span::styled(format!("  {}", exercise.duration), Styles::text_muted()),
        ];
        if idx == current {
            spans.push(Span::raw("   "));
            spans.extend(timer_controls(timer));
        }

        lines.push(Line::from(spans));
        lines.push(Line::styled(
            format!("   {}", exercise.description),
            Styles::text_muted(),
        ));
        lines.push(Line::from(""));
    }

    let block = panel(&plan.title, true).title_top(
        Line::styled(format!(" ⏱ {} ", plan.total_duration), Styles::text_muted()).right_aligned(),
    );
    let list = Paragraph::new(lines).block(block);
    frame.render_widget(list, area);
}

fn timer_controls(timer: &ExerciseTimer) -> Vec<Span<'static>> {
    let scheme = colors();
    if timer.is_running() {
        vec![
            Span::styled(format!("▶ {}", timer.display()), Style::default().fg(scheme.current).bold()),
            Span::styled("  [p]", Styles::shortcut_key()),
            Span::styled("pause", Styles::shortcut_desc()),
            Span::styled(" [c]", Styles::shortcut_key()),
            Span::styled("complete", Styles::shortcut_desc()),
        ]
    } else {
        let mut spans = vec![
            Span::styled("[s]", Styles::shortcut_key()),
            Span::styled("Start", Styles::shortcut_desc()),
        ];
        if timer.elapsed_seconds() > 0 {
            spans.push(Span::styled(
                format!("  ⏸ {}", timer.display()),
                Styles::warning(),
            ));
        }
        spans
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, plan: &RecoveryPlan, completed_sessions: u32) {
    let scheme = colors();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Min(3),
        ])
        .split(area);

    let stat = |label: &'static str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!(" {label}: "), Styles::text_muted()),
            Span::styled(value, style),
        ])
    };
    let progress = Paragraph::new(vec![
        stat(
            "Sessions This Week",
            completed_sessions.to_string(),
            Styles::value(),
        ),
        stat("Streak", STREAK.to_string(), Styles::value()),
        stat("Pain Reduction", PAIN_REDUCTION.to_string(), Styles::success().bold()),
    ])
    .block(panel("Your Progress", false));
    frame.render_widget(progress, rows[0]);

    let focus = Paragraph::new(chip_line(&plan.pain_focus, scheme.pain_chip))
        .block(panel("Focus Areas", false))
        .wrap(Wrap { trim: false });
    frame.render_widget(focus, rows[1]);

    let equipment = Paragraph::new(chip_line(&plan.equipment_used, scheme.equipment_chip))
        .block(panel("Using Today", false))
        .wrap(Wrap { trim: false });
    frame.render_widget(equipment, rows[2]);
}
