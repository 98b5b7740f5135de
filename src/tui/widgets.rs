//! Reusable widgets and layout helpers for the TUI.

use crate::tui::theme::{chip, colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Minimum terminal width for the full layout.
pub const MIN_WIDTH: u16 = 72;
/// Minimum terminal height for the full layout.
pub const MIN_HEIGHT: u16 = 24;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled("Terminal too small", Styles::warning().bold()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(format!("{}x{}", area.width, area.height), Styles::text()),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
        Line::from(""),
        Line::styled("Please resize your terminal", Styles::text_muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// A bordered panel with a padded title; an empty title draws none.
pub fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    if title.is_empty() {
        block
    } else {
        block
            .title(format!(" {title} "))
            .title_style(Styles::section_title())
    }
}

/// A row of colored chips, one per label.
pub fn chip_line<'a, I>(labels: I, bg: Color) -> Line<'static>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut spans = Vec::new();
    for (i, label) in labels.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(chip(label, bg));
    }
    Line::from(spans)
}

/// Horizontal meter: `filled` of `total` cells.
pub fn meter(filled: u8, total: u8, color: Color) -> Vec<Span<'static>> {
    let filled = filled.min(total);
    vec![
        Span::styled(
            "■".repeat(usize::from(filled)),
            Style::default().fg(color),
        ),
        Span::styled(
            "□".repeat(usize::from(total - filled)),
            Style::default().fg(colors().muted),
        ),
    ]
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = if max_width > 3 { max_width - 3 } else { max_width };

    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();

    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Pad a string with spaces to a display width.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - current))
    }
}
