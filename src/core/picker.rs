//! Data provider for the picker demonstration.
//!
//! Explicit interface instead of a delegate/data-source pair: the render
//! layer calls `row_count()`/`label()` directly and reports user choices
//! through `on_select()`. A fresh provider is created per detail screen
//! activation; selections never persist across screens.

use crate::core::error::TourError;
use crate::core::observer::Observer;

/// Fixed number of rows in the demo picker.
pub const ROW_COUNT: usize = 5;

pub struct PickerProvider {
    selected_row: usize,
    observer: Option<Observer>,
}

impl PickerProvider {
    /// New provider defaulting to row 0, without firing a selection event.
    pub fn new() -> Self {
        Self {
            selected_row: 0,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Observer) {
        self.observer = Some(observer);
    }

    pub fn row_count(&self) -> usize {
        ROW_COUNT
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Display label for a row.
    pub fn label(&self, row: usize) -> Result<String, TourError> {
        if row >= ROW_COUNT {
            return Err(TourError::OutOfRange {
                index: row,
                len: ROW_COUNT,
            });
        }
        Ok(format!("Option {}", row + 1))
    }

    /// Record a selection and notify the observer with the display string.
    pub fn on_select(&mut self, row: usize) -> Result<(), TourError> {
        if row >= ROW_COUNT {
            return Err(TourError::OutOfRange {
                index: row,
                len: ROW_COUNT,
            });
        }

        self.selected_row = row;
        let text = format!("Selected: Option {}", row + 1);
        if let Some(observer) = self.observer.as_mut() {
            observer(&text);
        }
        Ok(())
    }
}

impl Default for PickerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_row_labels() {
        let picker = PickerProvider::new();

        assert_eq!(picker.row_count(), 5);
        assert_eq!(picker.label(0).unwrap(), "Option 1");
        assert_eq!(picker.label(4).unwrap(), "Option 5");
        assert_eq!(
            picker.label(5),
            Err(TourError::OutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_select_notifies_observer() {
        let mut picker = PickerProvider::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        picker.set_observer(Box::new(move |text| {
            sink.borrow_mut().push(text.to_string());
        }));

        picker.on_select(2).unwrap();

        assert_eq!(picker.selected_row(), 2);
        assert_eq!(seen.borrow().as_slice(), ["Selected: Option 3"]);
    }

    #[test]
    fn test_fresh_provider_has_no_implicit_selection() {
        let mut picker = PickerProvider::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        picker.set_observer(Box::new(move |text| {
            sink.borrow_mut().push(text.to_string());
        }));

        // Construction alone must not have produced a selection event.
        assert_eq!(picker.selected_row(), 0);
        assert!(seen.borrow().is_empty());

        assert!(picker.on_select(9).is_err());
        assert_eq!(picker.selected_row(), 0);
        assert!(seen.borrow().is_empty());
    }
}
