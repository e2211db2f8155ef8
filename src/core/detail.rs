//! Per-category detail screen state.
//!
//! A `DetailState` is created when a catalog row is opened and dropped when
//! the screen is dismissed. It owns every piece of mutable widget state for
//! that screen (nothing is shared across screen instances) and wires the
//! change handlers that mirror control values into the status line.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

use crate::core::catalog::CategoryTag;
use crate::core::datefmt::{self, DateField};
use crate::core::picker::PickerProvider;
use crate::core::progress::ProgressMachine;
use crate::ui::{MenuItem, PopupMenu};

pub const SEGMENT_LABELS: [&str; 3] = ["Option One", "Option Two", "Option Three"];
pub const BUTTON_LABELS: [&str; 3] = ["System Button", "Custom Button", "★ Icon Button"];
pub const ALERT_LAUNCHERS: [&str; 2] = ["Show Alert", "Show Action Sheet"];
pub const PROGRESS_ACTIONS: [&str; 2] = ["Start", "Reset"];

const SLIDER_MAX: u8 = 100;
const STEPPER_MAX: u8 = 10;
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

pub struct DetailState {
    pub tag: CategoryTag,
    pub title: String,
    status: Rc<RefCell<String>>,

    /// Index of the focused interactive element, for categories with more
    /// than one (buttons, text fields, progress actions, alert launchers).
    pub focus: usize,

    pub switch_on: bool,
    pub slider_value: u8,
    pub segment_index: usize,
    pub stepper_value: u8,
    pub spinner_frame: usize,
    next_spin: Instant,

    pub text_fields: [TextArea<'static>; 3],
    pub text_view: TextArea<'static>,

    pub date_value: NaiveDateTime,
    pub date_field: DateField,

    pub picker: PickerProvider,
    pub progress: ProgressMachine,

    pub modal: Option<PopupMenu>,
}

impl DetailState {
    pub fn new(tag: CategoryTag, title: String, tick_interval: Duration) -> Self {
        let status = Rc::new(RefCell::new(String::new()));

        let mut progress = ProgressMachine::new(tick_interval);
        let sink = Rc::clone(&status);
        progress.set_observer(Box::new(move |text| {
            *sink.borrow_mut() = format!("Progress: {}", text);
        }));

        let mut picker = PickerProvider::new();
        let sink = Rc::clone(&status);
        picker.set_observer(Box::new(move |text| {
            *sink.borrow_mut() = text.to_string();
        }));

        // Three single-line fields: plain, with placeholder text, and masked.
        let basic = TextArea::default();
        let mut placeholder = TextArea::default();
        placeholder.set_placeholder_text("Placeholder text");
        let mut secure = TextArea::default();
        secure.set_placeholder_text("Password");
        secure.set_mask_char('*');

        let text_view = TextArea::from([
            "This is a multi-line text view.",
            "",
            "Type here to edit the content. It supports the usual",
            "cursor movement, insertion and deletion you would expect",
            "from a plain text editor.",
        ]);

        let date_value = Local::now().naive_local();

        let mut state = Self {
            tag,
            title,
            status,
            focus: 0,
            switch_on: true,
            slider_value: 50,
            segment_index: 0,
            stepper_value: 5,
            spinner_frame: 0,
            next_spin: Instant::now() + SPINNER_INTERVAL,
            text_fields: [basic, placeholder, secure],
            text_view,
            date_value,
            date_field: DateField::Year,
            picker,
            progress,
            modal: None,
        };
        state.set_status(state.initial_status());
        state
    }

    fn initial_status(&self) -> String {
        match self.tag {
            CategoryTag::SwitchControl => "Switch: On".to_string(),
            CategoryTag::Slider => format!("Value: {}", self.slider_value),
            CategoryTag::SegmentedControl => format!("Selected: {}", SEGMENT_LABELS[0]),
            CategoryTag::ProgressView => "Progress: 0%".to_string(),
            CategoryTag::Stepper => format!("Value: {}", self.stepper_value),
            // The formatter runs once at activation with the current instant.
            CategoryTag::DatePicker => format!("Date: {}", datefmt::format_naive(&self.date_value)),
            // Row 0 display text, without an implicit selection event.
            CategoryTag::PickerView => "Selected: Option 1".to_string(),
            _ => String::new(),
        }
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    fn set_status(&self, text: String) {
        *self.status.borrow_mut() = text;
    }

    /// Number of focusable elements for this category.
    pub fn focus_slots(&self) -> usize {
        match self.tag {
            CategoryTag::Button => BUTTON_LABELS.len(),
            CategoryTag::TextField => self.text_fields.len(),
            CategoryTag::ProgressView => PROGRESS_ACTIONS.len(),
            CategoryTag::AlertController => ALERT_LAUNCHERS.len(),
            _ => 1,
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.focus_slots();
    }

    fn focus_prev(&mut self) {
        let slots = self.focus_slots();
        self.focus = (self.focus + slots - 1) % slots;
    }

    /// Drive time-based state: progress ticks and the spinner animation.
    pub fn poll(&mut self, now: Instant) {
        self.progress.poll(now);

        if self.tag == CategoryTag::ActivityIndicator {
            while now >= self.next_spin {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.next_spin += SPINNER_INTERVAL;
            }
        }
    }

    /// Teardown on dismissal: any pending tick schedule must die with the
    /// screen.
    pub fn deactivate(&mut self) {
        self.progress.stop();
        self.modal = None;
    }

    /// Handle a key while a modal dialog is open. Returns true if the key
    /// was consumed (including Esc, which closes the dialog).
    fn handle_modal_key(&mut self, code: KeyCode) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };

        match code {
            KeyCode::Up | KeyCode::Char('k') => modal.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => modal.select_next(),
            KeyCode::Enter => {
                // Dismissal is a terminal no-op: informational only.
                if let Some(choice) = modal.selected_command() {
                    tracing::info!("dialog dismissed with choice: {}", choice);
                }
                self.modal = None;
            }
            KeyCode::Esc => {
                tracing::info!("dialog cancelled");
                self.modal = None;
            }
            _ => {}
        }
        true
    }

    /// Handle a key for this detail screen. Returns true if consumed.
    /// Esc is not handled here (outside of modals); the caller uses it to
    /// dismiss the screen.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.modal.is_some() {
            return self.handle_modal_key(code);
        }

        match self.tag {
            CategoryTag::SwitchControl => match code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.switch_on = !self.switch_on;
                    let text = if self.switch_on { "On" } else { "Off" };
                    self.set_status(format!("Switch: {}", text));
                    true
                }
                _ => false,
            },

            CategoryTag::Slider => match code {
                KeyCode::Left => {
                    self.slider_value = self.slider_value.saturating_sub(1);
                    self.set_status(format!("Value: {}", self.slider_value));
                    true
                }
                KeyCode::Right => {
                    self.slider_value = (self.slider_value + 1).min(SLIDER_MAX);
                    self.set_status(format!("Value: {}", self.slider_value));
                    true
                }
                _ => false,
            },

            CategoryTag::SegmentedControl => {
                let selected = match code {
                    KeyCode::Left => self.segment_index.saturating_sub(1),
                    KeyCode::Right => (self.segment_index + 1).min(SEGMENT_LABELS.len() - 1),
                    KeyCode::Char(c @ '1'..='3') => (c as usize) - ('1' as usize),
                    _ => return false,
                };
                self.segment_index = selected;
                self.set_status(format!("Selected: {}", SEGMENT_LABELS[selected]));
                true
            }

            CategoryTag::Stepper => match code {
                KeyCode::Up | KeyCode::Right => {
                    self.stepper_value = (self.stepper_value + 1).min(STEPPER_MAX);
                    self.set_status(format!("Value: {}", self.stepper_value));
                    true
                }
                KeyCode::Down | KeyCode::Left => {
                    self.stepper_value = self.stepper_value.saturating_sub(1);
                    self.set_status(format!("Value: {}", self.stepper_value));
                    true
                }
                _ => false,
            },

            CategoryTag::DatePicker => match code {
                KeyCode::Left => {
                    self.date_field = self.date_field.prev();
                    true
                }
                KeyCode::Right => {
                    self.date_field = self.date_field.next();
                    true
                }
                KeyCode::Up | KeyCode::Down => {
                    let delta = if code == KeyCode::Up { 1 } else { -1 };
                    self.date_value = datefmt::adjust(self.date_value, self.date_field, delta);
                    self.set_status(format!("Date: {}", datefmt::format_naive(&self.date_value)));
                    true
                }
                _ => false,
            },

            CategoryTag::PickerView => match code {
                KeyCode::Up | KeyCode::Char('k') => {
                    let row = self.picker.selected_row().saturating_sub(1);
                    let _ = self.picker.on_select(row);
                    true
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let row = (self.picker.selected_row() + 1).min(self.picker.row_count() - 1);
                    let _ = self.picker.on_select(row);
                    true
                }
                _ => false,
            },

            CategoryTag::Button => match code {
                KeyCode::Tab | KeyCode::Down => {
                    self.focus_next();
                    true
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.focus_prev();
                    true
                }
                KeyCode::Enter => {
                    tracing::info!("button pressed: {}", BUTTON_LABELS[self.focus]);
                    true
                }
                _ => false,
            },

            CategoryTag::TextField => match code {
                // Single-line fields: Enter never reaches the editor, it
                // advances focus like a return key.
                KeyCode::Tab | KeyCode::Enter => {
                    self.focus_next();
                    true
                }
                KeyCode::BackTab => {
                    self.focus_prev();
                    true
                }
                _ => self.text_fields[self.focus]
                    .input(KeyEvent::new(code, modifiers)),
            },

            CategoryTag::TextView => self.text_view.input(KeyEvent::new(code, modifiers)),

            CategoryTag::ProgressView => match code {
                KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                    self.focus_next();
                    true
                }
                KeyCode::Enter => {
                    if self.focus == 0 {
                        self.progress.start();
                    } else {
                        self.progress.reset();
                    }
                    true
                }
                KeyCode::Char('s') => {
                    self.progress.start();
                    true
                }
                KeyCode::Char('r') => {
                    self.progress.reset();
                    true
                }
                _ => false,
            },

            CategoryTag::AlertController => match code {
                KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                    self.focus_next();
                    true
                }
                KeyCode::Enter => {
                    self.modal = Some(self.build_dialog());
                    true
                }
                _ => false,
            },

            // Passive categories: nothing to interact with.
            CategoryTag::Label | CategoryTag::ActivityIndicator | CategoryTag::ImageView => false,
        }
    }

    fn build_dialog(&self) -> PopupMenu {
        if self.focus == 0 {
            PopupMenu::new(
                "Alert",
                Some("This is a modal alert demonstration"),
                vec![
                    MenuItem::new("OK", "alert:ok"),
                    MenuItem::new("Cancel", "alert:cancel"),
                ],
            )
        } else {
            PopupMenu::new(
                "Action Sheet",
                Some("Choose an action"),
                vec![
                    MenuItem::new("Option One", "sheet:one"),
                    MenuItem::new("Option Two", "sheet:two"),
                    MenuItem::new("Delete", "sheet:delete"),
                    MenuItem::new("Cancel", "sheet:cancel"),
                ],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::progress::TICK_INTERVAL;

    fn detail(tag: CategoryTag) -> DetailState {
        DetailState::new(tag, "test".to_string(), TICK_INTERVAL)
    }

    #[test]
    fn test_switch_mirrors_state() {
        let mut state = detail(CategoryTag::SwitchControl);
        assert_eq!(state.status(), "Switch: On");

        state.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(state.status(), "Switch: Off");
        assert!(!state.switch_on);

        state.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(state.status(), "Switch: On");
    }

    #[test]
    fn test_slider_stays_in_range() {
        let mut state = detail(CategoryTag::Slider);
        assert_eq!(state.status(), "Value: 50");

        for _ in 0..200 {
            state.handle_key(KeyCode::Right, KeyModifiers::NONE);
        }
        assert_eq!(state.slider_value, 100);
        assert_eq!(state.status(), "Value: 100");

        for _ in 0..200 {
            state.handle_key(KeyCode::Left, KeyModifiers::NONE);
        }
        assert_eq!(state.slider_value, 0);
        assert_eq!(state.status(), "Value: 0");
    }

    #[test]
    fn test_stepper_bounds() {
        let mut state = detail(CategoryTag::Stepper);
        assert_eq!(state.stepper_value, 5);

        for _ in 0..20 {
            state.handle_key(KeyCode::Up, KeyModifiers::NONE);
        }
        assert_eq!(state.stepper_value, 10);

        for _ in 0..20 {
            state.handle_key(KeyCode::Down, KeyModifiers::NONE);
        }
        assert_eq!(state.stepper_value, 0);
        assert_eq!(state.status(), "Value: 0");
    }

    #[test]
    fn test_segment_selection() {
        let mut state = detail(CategoryTag::SegmentedControl);
        assert_eq!(state.status(), "Selected: Option One");

        state.handle_key(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(state.status(), "Selected: Option Two");

        state.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(state.status(), "Selected: Option Three");
    }

    #[test]
    fn test_picker_keys_drive_provider() {
        let mut state = detail(CategoryTag::PickerView);
        assert_eq!(state.status(), "Selected: Option 1");

        state.handle_key(KeyCode::Down, KeyModifiers::NONE);
        state.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(state.picker.selected_row(), 2);
        assert_eq!(state.status(), "Selected: Option 3");

        // Clamped at the last row
        for _ in 0..10 {
            state.handle_key(KeyCode::Down, KeyModifiers::NONE);
        }
        assert_eq!(state.status(), "Selected: Option 5");
    }

    #[test]
    fn test_date_activation_formats_current_instant() {
        let state = detail(CategoryTag::DatePicker);
        let expected = format!("Date: {}", datefmt::format_naive(&state.date_value));
        assert_eq!(state.status(), expected);
    }

    #[test]
    fn test_modal_opens_and_dismisses() {
        let mut state = detail(CategoryTag::AlertController);
        assert!(state.modal.is_none());

        state.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(state.modal.is_some());

        // Keys are routed to the dialog while it is open
        state.handle_key(KeyCode::Down, KeyModifiers::NONE);
        state.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_action_sheet_has_four_choices() {
        let mut state = detail(CategoryTag::AlertController);
        state.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        state.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        let modal = state.modal.as_ref().unwrap();
        assert_eq!(modal.items().len(), 4);
        assert_eq!(modal.items()[2].text, "Delete");
    }

    #[test]
    fn test_progress_actions() {
        let mut state = detail(CategoryTag::ProgressView);
        assert_eq!(state.status(), "Progress: 0%");
        assert_eq!(state.progress.current(), 0.0);

        state.handle_key(KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(state.progress.is_running());

        for _ in 0..30 {
            state.progress.tick();
        }
        assert_eq!(state.status(), "Progress: 30%");

        state.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(!state.progress.is_running());
        assert_eq!(state.status(), "Progress: 0%");
    }

    #[test]
    fn test_deactivate_stops_ticker() {
        let mut state = detail(CategoryTag::ProgressView);
        state.progress.start();
        state.deactivate();
        assert!(!state.progress.is_running());
    }

    #[test]
    fn test_text_field_focus_cycles() {
        let mut state = detail(CategoryTag::TextField);
        assert_eq!(state.focus, 0);
        state.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        state.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(state.focus, 2);
        state.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(state.focus, 0);

        state.handle_key(KeyCode::Char('h'), KeyModifiers::NONE);
        state.handle_key(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(state.text_fields[0].lines()[0], "hi");
    }

    #[test]
    fn test_text_field_stays_single_line() {
        let mut state = detail(CategoryTag::TextField);

        state.handle_key(KeyCode::Char('a'), KeyModifiers::NONE);
        state.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        // Enter moves to the next field instead of inserting a newline.
        assert_eq!(state.focus, 1);

        state.handle_key(KeyCode::BackTab, KeyModifiers::NONE);
        state.handle_key(KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(state.text_fields[0].lines().len(), 1);
        assert_eq!(state.text_fields[0].lines()[0], "ab");
    }
}
