//! Frontend abstraction layer.
//!
//! The `Frontend` trait separates rendering concerns from core logic: the
//! main loop polls events, hands them to `AppCore`, and asks the frontend to
//! render the current state.

pub mod events;
pub mod tui;

use anyhow::Result;

use crate::core::AppCore;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

pub trait Frontend {
    /// Drain pending input, converted to frontend-agnostic events.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state; called once per frame.
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Restore the terminal before the application exits.
    fn cleanup(&mut self) -> Result<()>;
}
