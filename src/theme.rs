//! Color theme, configured as hex strings and parsed to ratatui colors.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Convert a "#rrggbb" hex string to a ratatui Color.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub border: String,
    pub title: String,
    pub status: String,
    pub muted: String,
    pub accent: String,
    pub highlight_fg: String,
    pub highlight_bg: String,
    pub bar_fill: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: "#5f87af".to_string(),
            title: "#e4e4e4".to_string(),
            status: "#ffd700".to_string(),
            muted: "#808080".to_string(),
            accent: "#87d7ff".to_string(),
            highlight_fg: "#000000".to_string(),
            highlight_bg: "#ffd700".to_string(),
            bar_fill: "#00af5f".to_string(),
        }
    }
}

impl Theme {
    pub fn border_color(&self) -> Color {
        hex_to_color(&self.border).unwrap_or(Color::White)
    }

    pub fn title_color(&self) -> Color {
        hex_to_color(&self.title).unwrap_or(Color::White)
    }

    pub fn status_color(&self) -> Color {
        hex_to_color(&self.status).unwrap_or(Color::Yellow)
    }

    pub fn muted_color(&self) -> Color {
        hex_to_color(&self.muted).unwrap_or(Color::DarkGray)
    }

    pub fn accent_color(&self) -> Color {
        hex_to_color(&self.accent).unwrap_or(Color::Cyan)
    }

    pub fn highlight_fg_color(&self) -> Color {
        hex_to_color(&self.highlight_fg).unwrap_or(Color::Black)
    }

    pub fn highlight_bg_color(&self) -> Color {
        hex_to_color(&self.highlight_bg).unwrap_or(Color::Yellow)
    }

    pub fn bar_fill_color(&self) -> Color {
        hex_to_color(&self.bar_fill).unwrap_or(Color::Green)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(hex_to_color("00ff7f"), Some(Color::Rgb(0, 255, 127)));
        assert_eq!(hex_to_color("#fff"), None);
        assert_eq!(hex_to_color("#gggggg"), None);
    }

    #[test]
    fn test_default_theme_parses() {
        let theme = Theme::default();
        assert_eq!(theme.bar_fill_color(), Color::Rgb(0, 175, 95));
        assert_eq!(theme.highlight_fg_color(), Color::Rgb(0, 0, 0));
    }
}
