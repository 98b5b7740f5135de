//! Onboarding questionnaire: pain areas, intensity slider, equipment.

use crate::model::{Assessment, Catalog, Intensity};
use crate::tui::app::OnboardingItem;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{meter, pad_to_width, panel, truncate_str};
use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

const GRID_COLUMNS: usize = 2;
const MAX_LABEL_WIDTH: usize = 24;

/// Lines of the form plus the line index of the focused row.
struct Form {
    lines: Vec<Line<'static>>,
    focus_line: usize,
}

impl Form {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            focus_line: 0,
        }
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn push_focused(&mut self, line: Line<'static>, focused: bool) {
        if focused {
            self.focus_line = self.lines.len();
        }
        self.lines.push(line);
    }
}

pub fn render_onboarding(
    frame: &mut Frame,
    area: Rect,
    assessment: &Assessment,
    catalog: &Catalog,
    focused: Option<OnboardingItem>,
) {
    let scheme = colors();
    let mut form = Form::new();

    form.push(Line::styled("Let's Personalize Your Recovery", Styles::heading()));
    form.push(Line::styled(
        "Tell us about your training and any areas of concern",
        Styles::text_muted(),
    ));
    form.push(Line::from(""));

    form.push(Line::styled(
        "Any pain or soreness? (Select all that apply)",
        Styles::section_title(),
    ));
    push_grid(
        &mut form,
        &catalog.body_areas,
        |label| assessment.has_pain_area(label),
        |i| focused == Some(OnboardingItem::PainArea(i)),
        scheme.current,
    );
    form.push(Line::from(""));

    form.push(Line::styled(
        "Today's Training Intensity (1-10)",
        Styles::section_title(),
    ));
    let slider_focused = focused == Some(OnboardingItem::Intensity);
    form.push_focused(slider_line(assessment.intensity, slider_focused), slider_focused);
    form.push(Line::from(vec![
        Span::styled("  Recommended: ", Styles::text_muted()),
        Span::styled(
            crate::model::template_for(assessment.intensity.tier()).title,
            Styles::value(),
        ),
    ]));
    form.push(Line::from(""));

    form.push(Line::styled(
        "Available Equipment (Select all you have)",
        Styles::section_title(),
    ));
    push_grid(
        &mut form,
        &catalog.equipment,
        |label| assessment.has_equipment(label),
        |i| focused == Some(OnboardingItem::Equipment(i)),
        scheme.done,
    );
    form.push(Line::from(""));

    let submit_focused = focused == Some(OnboardingItem::Submit);
    let submit_style = if submit_focused {
        Style::default()
            .fg(scheme.badge_fg_light)
            .bg(scheme.secondary)
            .bold()
    } else {
        Style::default().fg(scheme.secondary).bold()
    };
    form.push_focused(
        Line::from(Span::styled("  ▶ Generate My Recovery Plan  ", submit_style)),
        submit_focused,
    );

    let block = panel("Assessment", true);
    let inner_height = usize::from(block.inner(area).height);
    let scroll = form.focus_line.saturating_sub(inner_height.saturating_sub(1));

    let paragraph = Paragraph::new(form.lines)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// Two-column grid of checkable labels.
fn push_grid(
    form: &mut Form,
    labels: &[String],
    is_selected: impl Fn(&str) -> bool,
    is_focused: impl Fn(usize) -> bool,
    selected_color: Color,
) {
    let label_width = labels
        .iter()
        .map(|l| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);

    for (row, chunk) in labels.chunks(GRID_COLUMNS).enumerate() {
        let mut spans = Vec::new();
        let mut row_focused = false;
        for (col, label) in chunk.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            let focused = is_focused(index);
            row_focused |= focused;
            spans.push(cell(label, label_width, is_selected(label), focused, selected_color));
        }
        form.push_focused(Line::from(spans), row_focused);
    }
}

fn cell(label: &str, width: usize, selected: bool, focused: bool, selected_color: Color) -> Span<'static> {
    let marker = if focused { "›" } else { " " };
    let check = if selected { "[x]" } else { "[ ]" };
    let text = pad_to_width(&truncate_str(label, width), width);
    let content = format!(" {marker} {check} {text}  ");

    let style = if focused {
        Styles::selected()
    } else if selected {
        Style::default().fg(selected_color).bold()
    } else {
        Styles::text()
    };
    Span::styled(content, style)
}

fn slider_line(intensity: Intensity, focused: bool) -> Line<'static> {
    let scheme = colors();
    let marker = if focused {
        Span::styled(" › ", Styles::selected())
    } else {
        Span::raw("   ")
    };
    let mut spans = vec![
        marker,
        Span::styled("Light ", Styles::text_muted()),
    ];
    spans.extend(meter(intensity.value(), Intensity::MAX, scheme.current));
    spans.push(Span::styled(" Intense  ", Styles::text_muted()));
    spans.push(Span::styled(
        intensity.value().to_string(),
        Style::default().fg(scheme.current).bold(),
    ));
    if focused {
        spans.push(Span::styled("  ←→ adjust", Styles::shortcut_desc()));
    }
    Line::from(spans)
}
