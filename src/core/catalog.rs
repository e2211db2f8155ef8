//! The master catalog: an ordered, read-only list of widget categories.
//!
//! Selecting a row resolves to a `CategoryTag`; the caller opens a detail
//! screen for that tag. Navigation is one-way - the catalog never holds a
//! reference to an open detail screen.

use crate::core::error::TourError;

/// Closed set of widget categories the tour demonstrates.
///
/// The discriminant doubles as the row index in the fixed catalog order and
/// as the index into the detail render table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum CategoryTag {
    Label,
    Button,
    TextField,
    TextView,
    SwitchControl,
    Slider,
    SegmentedControl,
    ActivityIndicator,
    ProgressView,
    Stepper,
    DatePicker,
    PickerView,
    ImageView,
    AlertController,
}

impl CategoryTag {
    pub const COUNT: usize = 14;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One row of the catalog list.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub display_name: &'static str,
    pub tag: CategoryTag,
}

/// Fixed, ordered list of (display name, tag) pairs. Created once at startup
/// and read-only thereafter.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        let entries = vec![
            CatalogEntry { display_name: "Label - static text", tag: CategoryTag::Label },
            CatalogEntry { display_name: "Button - push buttons", tag: CategoryTag::Button },
            CatalogEntry { display_name: "Text Field - single-line input", tag: CategoryTag::TextField },
            CatalogEntry { display_name: "Text View - multi-line editor", tag: CategoryTag::TextView },
            CatalogEntry { display_name: "Switch - on/off toggle", tag: CategoryTag::SwitchControl },
            CatalogEntry { display_name: "Slider - value in a range", tag: CategoryTag::Slider },
            CatalogEntry { display_name: "Segmented Control - exclusive choices", tag: CategoryTag::SegmentedControl },
            CatalogEntry { display_name: "Activity Indicator - busy spinner", tag: CategoryTag::ActivityIndicator },
            CatalogEntry { display_name: "Progress View - animated progress bar", tag: CategoryTag::ProgressView },
            CatalogEntry { display_name: "Stepper - increment/decrement", tag: CategoryTag::Stepper },
            CatalogEntry { display_name: "Date Picker - date and time", tag: CategoryTag::DatePicker },
            CatalogEntry { display_name: "Picker - wheel of options", tag: CategoryTag::PickerView },
            CatalogEntry { display_name: "Image View - static artwork", tag: CategoryTag::ImageView },
            CatalogEntry { display_name: "Alert - modal dialogs", tag: CategoryTag::AlertController },
        ];
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Resolve a row index to its category tag.
    pub fn select_entry(&self, index: usize) -> Result<CategoryTag, TourError> {
        self.entries
            .get(index)
            .map(|e| e.tag)
            .ok_or(TourError::OutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Display name for a row (used for detail screen titles).
    pub fn display_name(&self, index: usize) -> Result<&'static str, TourError> {
        self.entries
            .get(index)
            .map(|e| e.display_name)
            .ok_or(TourError::OutOfRange {
                index,
                len: self.entries.len(),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_category_table() {
        let catalog = Catalog::new();
        let expected = [
            CategoryTag::Label,
            CategoryTag::Button,
            CategoryTag::TextField,
            CategoryTag::TextView,
            CategoryTag::SwitchControl,
            CategoryTag::Slider,
            CategoryTag::SegmentedControl,
            CategoryTag::ActivityIndicator,
            CategoryTag::ProgressView,
            CategoryTag::Stepper,
            CategoryTag::DatePicker,
            CategoryTag::PickerView,
            CategoryTag::ImageView,
            CategoryTag::AlertController,
        ];

        assert_eq!(catalog.len(), expected.len());
        for (i, tag) in expected.iter().enumerate() {
            assert_eq!(catalog.select_entry(i).unwrap(), *tag, "row {}", i);
        }
    }

    #[test]
    fn test_out_of_range_selection() {
        let catalog = Catalog::new();

        assert_eq!(
            catalog.select_entry(14),
            Err(TourError::OutOfRange { index: 14, len: 14 })
        );
        assert!(catalog.select_entry(usize::MAX).is_err());
    }

    #[test]
    fn test_tag_index_matches_row() {
        let catalog = Catalog::new();
        for (i, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(entry.tag.index(), i);
        }
    }
}
