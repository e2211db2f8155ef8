//! The detail screen: shared chrome (title border, status line, key hints)
//! plus a per-category content renderer selected from a dispatch table.

use chrono::{Datelike, Timelike};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use crate::core::datefmt::DateField;
use crate::core::detail::{
    DetailState, ALERT_LAUNCHERS, BUTTON_LABELS, PROGRESS_ACTIONS, SEGMENT_LABELS,
};
use crate::core::CategoryTag;
use crate::theme::Theme;
use crate::ui::progress_bar::ProgressBar;
use crate::ui::spinner::Spinner;

type RenderFn = fn(&DetailState, Rect, &mut Buffer, &Theme);

/// Content renderers indexed by the category tag discriminant. Keeps the
/// category-to-screen mapping in one table instead of a sprawling match.
const RENDER_TABLE: [RenderFn; CategoryTag::COUNT] = [
    render_label,
    render_button,
    render_text_field,
    render_text_view,
    render_switch,
    render_slider,
    render_segmented,
    render_activity,
    render_progress,
    render_stepper,
    render_date_picker,
    render_picker,
    render_image,
    render_alert,
];

pub fn render(frame: &mut Frame, state: &DetailState, theme: &Theme) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.title.clone())
        .border_style(Style::default().fg(theme.border_color()))
        .title_style(
            Style::default()
                .fg(theme.title_color())
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content, status_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let buf = frame.buffer_mut();
    RENDER_TABLE[state.tag.index()](state, content, buf, theme);

    let status = state.status();
    if !status.is_empty() {
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.status_color()))
            .render(status_area, buf);
    }

    Paragraph::new(hint_for(state.tag))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted_color()))
        .render(hint_area, buf);

    // The modal paints over everything else.
    if let Some(modal) = &state.modal {
        modal.render(area, buf, theme);
    }
}

fn hint_for(tag: CategoryTag) -> &'static str {
    match tag {
        CategoryTag::Label | CategoryTag::ImageView | CategoryTag::ActivityIndicator => "Esc back",
        CategoryTag::Button => "Tab/↑↓ focus · Enter press · Esc back",
        CategoryTag::TextField => "Tab next field · type to edit · Esc back",
        CategoryTag::TextView => "Type to edit · Esc back",
        CategoryTag::SwitchControl => "Space toggle · Esc back",
        CategoryTag::Slider => "←/→ adjust · Esc back",
        CategoryTag::SegmentedControl => "←/→ or 1-3 select · Esc back",
        CategoryTag::ProgressView => "Enter activate · s start · r reset · Esc back",
        CategoryTag::Stepper => "↑/→ increment · ↓/← decrement · Esc back",
        CategoryTag::DatePicker => "←/→ field · ↑/↓ adjust · Esc back",
        CategoryTag::PickerView => "↑/↓ select · Esc back",
        CategoryTag::AlertController => "Tab switch · Enter open · Esc back",
    }
}

fn centered(text: &str, style: Style, area: Rect, buf: &mut Buffer) {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .render(area, buf);
}

fn render_label(_state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [plain, styled, wrapped, _] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(area);

    centered("This is a basic label", Style::default(), plain, buf);
    centered(
        "A styled label with color and emphasis",
        Style::default()
            .fg(theme.accent_color())
            .add_modifier(Modifier::BOLD),
        styled,
        buf,
    );
    Paragraph::new(
        "Labels can also span multiple lines. This one wraps to fit the \
         available width, however narrow the terminal happens to be.",
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(theme.muted_color()))
    .render(wrapped, buf);
}

fn button_row(label: &str, focused: bool, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let style = if focused {
        Style::default()
            .fg(theme.highlight_fg_color())
            .bg(theme.highlight_bg_color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent_color())
    };
    Paragraph::new(Line::from(Span::styled(format!("[ {} ]", label), style)))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_button(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [a, b, c, _] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    for (i, (label, row)) in BUTTON_LABELS.iter().zip([a, b, c]).enumerate() {
        button_row(label, state.focus == i, theme, row, buf);
    }
}

fn render_text_field(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [f0, f1, f2, _] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let titles = ["Basic", "Placeholder", "Secure"];
    for (i, rect) in [f0, f1, f2].into_iter().enumerate() {
        let border = if state.focus == i {
            theme.highlight_bg_color()
        } else {
            theme.border_color()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(titles[i])
            .border_style(Style::default().fg(border));
        let inner = block.inner(rect);
        block.render(rect, buf);
        (&state.text_fields[i]).render(inner, buf);
    }
}

fn render_text_view(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Editor")
        .border_style(Style::default().fg(theme.accent_color()));
    let inner = block.inner(area);
    block.render(area, buf);
    (&state.text_view).render(inner, buf);
}

fn render_switch(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [row, _] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let (glyph, style) = if state.switch_on {
        (
            "◉ On ",
            Style::default()
                .fg(theme.bar_fill_color())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("○ Off", Style::default().fg(theme.muted_color()))
    };
    centered(glyph, style, row, buf);
}

fn render_slider(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [bar, _] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    ProgressBar::new("0 – 100")
        .value(state.slider_value as u32, 100)
        .colors(
            theme.bar_fill_color(),
            theme.title_color(),
            theme.border_color(),
        )
        .render(bar, buf);
}

fn render_segmented(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [row, _] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let mut spans = Vec::new();
    for (i, label) in SEGMENT_LABELS.iter().enumerate() {
        let style = if i == state.segment_index {
            Style::default()
                .fg(theme.highlight_fg_color())
                .bg(theme.highlight_bg_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent_color())
        };
        spans.push(Span::styled(format!("  {}  ", label), style));
        if i + 1 < SEGMENT_LABELS.len() {
            spans.push(Span::styled("│", Style::default().fg(theme.border_color())));
        }
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(row, buf);
}

fn render_activity(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [spin, desc, _] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    Spinner::new(state.spinner_frame, theme.accent_color()).render(spin, buf);
    centered(
        "The indicator animates while this screen is open",
        Style::default().fg(theme.muted_color()),
        desc,
        buf,
    );
}

fn render_progress(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [bar, actions, _] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    let custom = state
        .progress
        .is_completed()
        .then(|| "Complete".to_string());
    ProgressBar::new("Progress")
        .value(state.progress.percent(), 100)
        .custom_text(custom)
        .colors(
            theme.bar_fill_color(),
            theme.title_color(),
            theme.border_color(),
        )
        .render(bar, buf);

    let mut spans = Vec::new();
    for (i, label) in PROGRESS_ACTIONS.iter().enumerate() {
        let style = if i == state.focus {
            Style::default()
                .fg(theme.highlight_fg_color())
                .bg(theme.highlight_bg_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent_color())
        };
        spans.push(Span::styled(format!("[ {} ]", label), style));
        spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(actions, buf);
}

fn render_stepper(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [row, _] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let line = Line::from(vec![
        Span::styled("[-]", Style::default().fg(theme.accent_color())),
        Span::styled(
            format!("  {}  ", state.stepper_value),
            Style::default()
                .fg(theme.title_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("[+]", Style::default().fg(theme.accent_color())),
    ]);
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(row, buf);
}

fn render_date_picker(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [row, _] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let d = &state.date_value;
    let fields = [
        (format!("{:04}", d.year()), DateField::Year, "年"),
        (format!("{:02}", d.month()), DateField::Month, "月"),
        (format!("{:02}", d.day()), DateField::Day, "日 "),
        (format!("{:02}", d.hour()), DateField::Hour, ":"),
        (format!("{:02}", d.minute()), DateField::Minute, ""),
    ];

    let mut spans = Vec::new();
    for (text, field, suffix) in fields {
        let style = if field == state.date_field {
            Style::default()
                .fg(theme.highlight_fg_color())
                .bg(theme.highlight_bg_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.title_color())
        };
        spans.push(Span::styled(text, style));
        if !suffix.is_empty() {
            spans.push(Span::styled(
                suffix.to_string(),
                Style::default().fg(theme.muted_color()),
            ));
        }
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(row, buf);
}

fn render_picker(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let mut constraints = vec![Constraint::Length(1); state.picker.row_count()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    for row in 0..state.picker.row_count() {
        let label = state.picker.label(row).unwrap_or_default();
        let selected = row == state.picker.selected_row();
        let (marker, style) = if selected {
            (
                "▸ ",
                Style::default()
                    .fg(theme.highlight_fg_color())
                    .bg(theme.highlight_bg_color())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(theme.title_color()))
        };
        Paragraph::new(Line::from(Span::styled(
            format!("{}{}", marker, label),
            style,
        )))
        .alignment(Alignment::Center)
        .render(rows[row], buf);
    }
}

fn render_image(_state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    const ART: [&str; 7] = [
        "╭──────────────────╮",
        "│        ☀         │",
        "│     ▗▄▄▖         │",
        "│    ▗▟██▙▖   ▄▄   │",
        "│   ▗▟████▙▖▄████▄ │",
        "│  ▁▁▁▁▁▁▁▁▁▁▁▁▁▁  │",
        "╰──────────────────╯",
    ];

    let [art_area, desc, _] = Layout::vertical([
        Constraint::Length(ART.len() as u16),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    let lines: Vec<Line> = ART
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(theme.accent_color()))))
        .collect();
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(art_area, buf);
    centered(
        "A static placeholder image",
        Style::default().fg(theme.muted_color()),
        desc,
        buf,
    );
}

fn render_alert(state: &DetailState, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let [a, b, _] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    for (i, (label, row)) in ALERT_LAUNCHERS.iter().zip([a, b]).enumerate() {
        button_row(label, state.focus == i, theme, row, buf);
    }
}
