//! Frontend-agnostic input events.
//!
//! The terminal frontend translates its native crossterm event stream into
//! this enum so the core logic only handles one event shape.

use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
}
