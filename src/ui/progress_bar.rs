//! A progress bar widget: the bar is the colored background behind the text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

pub struct ProgressBar {
    label: String,
    current: u32,
    max: u32,
    /// Custom text to display instead of the percentage (e.g. "Complete").
    custom_text: Option<String>,
    bar_fill: Color,
    text_color: Color,
    border_color: Color,
    show_border: bool,
}

impl ProgressBar {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            current: 0,
            max: 100,
            custom_text: None,
            bar_fill: Color::Green,
            text_color: Color::White,
            border_color: Color::White,
            show_border: true,
        }
    }

    pub fn value(mut self, current: u32, max: u32) -> Self {
        self.current = current;
        self.max = max;
        self
    }

    pub fn custom_text(mut self, text: Option<String>) -> Self {
        self.custom_text = text;
        self
    }

    pub fn colors(mut self, bar_fill: Color, text_color: Color, border_color: Color) -> Self {
        self.bar_fill = bar_fill;
        self.text_color = text_color;
        self.border_color = border_color;
        self
    }

    pub fn show_border(mut self, show: bool) -> Self {
        self.show_border = show;
        self
    }

    pub fn percentage(&self) -> u32 {
        if self.max == 0 {
            0
        } else {
            (self.current as f64 / self.max as f64 * 100.0) as u32
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if (self.show_border && area.width < 3) || area.width == 0 || area.height < 1 {
            return;
        }

        let inner_area = if self.show_border {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.border_color))
                .title(self.label.as_str());
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let percentage = self.percentage();
        let display_text = match self.custom_text {
            Some(ref custom) => custom.clone(),
            None => format!("{}%", percentage),
        };

        let available_width = inner_area.width;
        let split_position = ((percentage as f64 / 100.0) * available_width as f64) as u16;
        let y = inner_area.y;

        // First pass: the filled portion is the bar color as background.
        for i in 0..available_width {
            let x = inner_area.x + i;
            if x < buf.area().width && y < buf.area().height {
                buf[(x, y)].set_char(' ');
                if i < split_position {
                    buf[(x, y)].set_bg(self.bar_fill);
                }
            }
        }

        // Second pass: centered text on top.
        let text_width = display_text.chars().count() as u16;
        if text_width <= available_width {
            let text_start_x = inner_area.x + (available_width - text_width) / 2;
            for (i, c) in display_text.chars().enumerate() {
                let x = text_start_x + i as u16;
                if x < buf.area().width && y < buf.area().height {
                    let char_position = x - inner_area.x;
                    buf[(x, y)].set_char(c);
                    buf[(x, y)].set_fg(self.text_color);
                    if char_position < split_position {
                        buf[(x, y)].set_bg(self.bar_fill);
                    }
                }
            }
        }
    }
}
