//! Braille spinner for the activity indicator demonstration.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

pub const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct Spinner {
    frame: usize,
    color: Color,
}

impl Spinner {
    pub fn new(frame: usize, color: Color) -> Self {
        Self { frame, color }
    }

    pub fn glyph(&self) -> char {
        FRAMES[self.frame % FRAMES.len()]
    }

    /// Draw the spinner centered in `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let x = area.x + area.width / 2;
        let y = area.y + area.height / 2;
        if x < buf.area().width && y < buf.area().height {
            buf[(x, y)].set_char(self.glyph());
            buf[(x, y)].set_fg(self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cycle() {
        assert_eq!(Spinner::new(0, Color::White).glyph(), '⠋');
        assert_eq!(Spinner::new(9, Color::White).glyph(), '⠏');
        assert_eq!(Spinner::new(10, Color::White).glyph(), '⠋');
        assert_eq!(
            Spinner::new(usize::MAX, Color::White).glyph(),
            FRAMES[usize::MAX % FRAMES.len()]
        );
    }
}
