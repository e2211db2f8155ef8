//! Modal dialog rendered as a centered popup.
//!
//! Used for the alert and action-sheet demonstrations. The dialog owns its
//! choice list and selection; dismissal reports the chosen command to the
//! caller and nothing else.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::Theme;

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
    pub command: String,
}

impl MenuItem {
    pub fn new(text: &str, command: &str) -> Self {
        Self {
            text: text.to_string(),
            command: command.to_string(),
        }
    }
}

pub struct PopupMenu {
    title: String,
    message: Option<String>,
    items: Vec<MenuItem>,
    selected_index: usize,
}

impl PopupMenu {
    pub fn new(title: &str, message: Option<&str>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.to_string(),
            message: message.map(|m| m.to_string()),
            items,
            selected_index: 0,
        }
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.items.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.items.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.items.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_command(&self) -> Option<String> {
        self.items
            .get(self.selected_index)
            .map(|item| item.command.clone())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Render the dialog centered in `area`, on top of whatever is there.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let content_width = self
            .items
            .iter()
            .map(|item| item.text.len())
            .chain(self.message.as_ref().map(|m| m.len()))
            .chain(std::iter::once(self.title.len()))
            .max()
            .unwrap_or(20)
            .min(50);

        let message_rows = if self.message.is_some() { 2 } else { 0 };
        let menu_width = (content_width + 6) as u16;
        let menu_height = (self.items.len() + message_rows + 2) as u16;

        if area.width < menu_width || area.height < menu_height {
            return;
        }

        let menu_rect = Rect {
            x: area.x + (area.width - menu_width) / 2,
            y: area.y + (area.height - menu_height) / 2,
            width: menu_width,
            height: menu_height,
        };

        // Clear the popup area to prevent bleed-through
        Clear.render(menu_rect, buf);

        let inner_width = menu_width.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = Vec::new();

        if let Some(ref message) = self.message {
            lines.push(Line::from(Span::styled(
                format!(" {:^width$} ", message, width = inner_width.saturating_sub(2)),
                Style::default().fg(theme.muted_color()),
            )));
            lines.push(Line::default());
        }

        for (idx, item) in self.items.iter().enumerate() {
            let style = if idx == self.selected_index {
                Style::default()
                    .fg(theme.highlight_fg_color())
                    .bg(theme.highlight_bg_color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.accent_color())
            };

            let text = format!(" {:^width$} ", item.text, width = inner_width.saturating_sub(2));
            lines.push(Line::from(Span::styled(text, style)));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(self.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color())),
        );

        paragraph.render(menu_rect, buf);
    }
}
