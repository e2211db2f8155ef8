//! Core application state (frontend-agnostic).
//!
//! `AppCore` owns the catalog, the current screen, and the running flag.
//! Frontends feed it `FrontendEvent`s and read its state to render. The
//! catalog screen and detail screens share no mutable state; opening a
//! detail screen replaces the previous one wholesale.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers};

use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::core::detail::DetailState;
use crate::core::error::TourError;
use crate::frontend::FrontendEvent;

pub enum Screen {
    Catalog,
    Detail(DetailState),
}

pub struct AppCore {
    pub config: Config,
    pub catalog: Catalog,
    pub screen: Screen,

    /// Highlighted row on the catalog screen.
    pub catalog_index: usize,

    pub running: bool,
}

impl AppCore {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            screen: Screen::Catalog,
            catalog_index: 0,
            running: true,
        }
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.ui.tick_interval_ms)
    }

    /// Open the detail screen for a catalog row.
    ///
    /// The UI only ever passes indices it obtained from the catalog itself,
    /// so the error path is unreachable from the running application; it
    /// exists for the contract, not as a runtime guard.
    pub fn open_detail(&mut self, index: usize) -> Result<(), TourError> {
        let tag = self.catalog.select_entry(index)?;
        let title = self.catalog.display_name(index)?;
        tracing::debug!("opening detail screen for row {} ({:?})", index, tag);
        self.screen = Screen::Detail(DetailState::new(tag, title.to_string(), self.tick_interval()));
        Ok(())
    }

    /// Dismiss the detail screen, tearing down its owned state.
    pub fn close_detail(&mut self) {
        if let Screen::Detail(state) = &mut self.screen {
            state.deactivate();
            tracing::debug!("closed detail screen for {:?}", state.tag);
        }
        self.screen = Screen::Catalog;
    }

    /// Advance time-based state (progress ticks, spinner frames).
    pub fn update(&mut self, now: Instant) {
        if let Screen::Detail(state) = &mut self.screen {
            state.poll(now);
        }
    }

    pub fn handle_event(&mut self, event: FrontendEvent) {
        match event {
            FrontendEvent::Resize { .. } => {
                // Layout is recomputed every frame; nothing to do here.
            }
            FrontendEvent::Key { code, modifiers } => self.handle_key(code, modifiers),
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Ctrl+C always quits, regardless of screen or focus.
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match &mut self.screen {
            Screen::Catalog => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.catalog_index = self.catalog_index.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.catalog_index = (self.catalog_index + 1).min(self.catalog.len() - 1);
                }
                KeyCode::Home => self.catalog_index = 0,
                KeyCode::End => self.catalog_index = self.catalog.len() - 1,
                KeyCode::Enter => {
                    if let Err(e) = self.open_detail(self.catalog_index) {
                        tracing::warn!("catalog selection failed: {}", e);
                    }
                }
                _ => {}
            },
            Screen::Detail(state) => {
                if code == KeyCode::Esc && state.modal.is_none() {
                    self.close_detail();
                    return;
                }
                state.handle_key(code, modifiers);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CategoryTag;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn core() -> AppCore {
        AppCore::new(Config::default())
    }

    fn key(core: &mut AppCore, code: KeyCode) {
        core.handle_event(FrontendEvent::Key {
            code,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_catalog_navigation_and_selection() {
        let mut app = core();
        assert!(matches!(app.screen, Screen::Catalog));

        for _ in 0..3 {
            key(&mut app, KeyCode::Down);
        }
        assert_eq!(app.catalog_index, 3);
        key(&mut app, KeyCode::Up);
        assert_eq!(app.catalog_index, 2);

        key(&mut app, KeyCode::Enter);
        match &app.screen {
            Screen::Detail(state) => assert_eq!(state.tag, CategoryTag::TextField),
            Screen::Catalog => panic!("expected detail screen"),
        }
    }

    #[test]
    fn test_catalog_index_clamps() {
        let mut app = core();
        for _ in 0..50 {
            key(&mut app, KeyCode::Down);
        }
        assert_eq!(app.catalog_index, 13);
        key(&mut app, KeyCode::Home);
        assert_eq!(app.catalog_index, 0);
    }

    #[test]
    fn test_escape_returns_to_catalog() {
        let mut app = core();
        key(&mut app, KeyCode::Enter);
        assert!(matches!(app.screen, Screen::Detail(_)));

        key(&mut app, KeyCode::Esc);
        assert!(matches!(app.screen, Screen::Catalog));
        assert!(app.running);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = core();
        key(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = core();
        app.handle_event(FrontendEvent::Key {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert!(!app.running);
    }

    #[test]
    fn test_open_detail_out_of_range() {
        let mut app = core();
        assert_eq!(
            app.open_detail(14),
            Err(TourError::OutOfRange { index: 14, len: 14 })
        );
        assert!(matches!(app.screen, Screen::Catalog));
    }

    #[test]
    fn test_progress_screen_end_to_end() {
        let mut app = core();

        // Row 8 is the progress view.
        app.open_detail(8).unwrap();
        let state = match &mut app.screen {
            Screen::Detail(state) => state,
            Screen::Catalog => panic!("expected detail screen"),
        };
        assert_eq!(state.tag, CategoryTag::ProgressView);
        assert_eq!(state.progress.current(), 0.0);

        // Re-register the observer (at most one at a time) with a recorder.
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.progress.set_observer(Box::new(move |text| {
            sink.borrow_mut().push(text.to_string());
        }));

        state.progress.start();
        for _ in 0..50 {
            state.progress.tick();
        }

        assert_eq!(seen.borrow().last().unwrap(), "50%");
        assert!(state.progress.is_running());
    }

    #[test]
    fn test_modal_blocks_escape_dismissal() {
        let mut app = core();
        app.open_detail(13).unwrap();

        key(&mut app, KeyCode::Enter); // open the alert dialog
        key(&mut app, KeyCode::Esc); // closes the dialog, not the screen
        assert!(matches!(app.screen, Screen::Detail(_)));

        key(&mut app, KeyCode::Esc);
        assert!(matches!(app.screen, Screen::Catalog));
    }
}
