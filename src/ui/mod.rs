mod catalog_list;
mod detail_view;
mod popup_menu;
mod progress_bar;
mod spinner;

pub use popup_menu::{MenuItem, PopupMenu};
pub use progress_bar::ProgressBar;
pub use spinner::Spinner;

use ratatui::Frame;

use crate::core::{AppCore, Screen};

/// Top-level draw dispatch, called once per frame.
pub fn draw(frame: &mut Frame, core: &AppCore) {
    match &core.screen {
        Screen::Catalog => catalog_list::render(frame, core),
        Screen::Detail(state) => detail_view::render(frame, state, &core.config.theme),
    }
}
