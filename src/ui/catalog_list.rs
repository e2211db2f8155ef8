//! The master list screen: one row per widget category.

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::AppCore;

pub fn render(frame: &mut Frame, core: &AppCore) {
    let theme = &core.config.theme;
    let [list_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let items: Vec<ListItem> = core
        .catalog
        .entries()
        .iter()
        .map(|entry| ListItem::new(entry.display_name))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Widget Tour")
                .border_style(Style::default().fg(theme.border_color()))
                .title_style(
                    Style::default()
                        .fg(theme.title_color())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .highlight_style(
            Style::default()
                .fg(theme.highlight_fg_color())
                .bg(theme.highlight_bg_color())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default().with_selected(Some(core.catalog_index));
    frame.render_stateful_widget(list, list_area, &mut state);

    let hint = Paragraph::new("↑/↓ select · Enter open · q quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted_color()));
    frame.render_widget(hint, hint_area);
}
