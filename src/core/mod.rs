//! Core logic layer.
//!
//! Catalog dispatch, the progress simulation state machine, the picker data
//! provider, date formatting, and screen state. Frontends feed events in and
//! read state out; nothing in here touches the terminal.

pub mod app_core;
pub mod catalog;
pub mod datefmt;
pub mod detail;
pub mod error;
pub mod observer;
pub mod picker;
pub mod progress;

pub use app_core::{AppCore, Screen};
pub use catalog::{Catalog, CatalogEntry, CategoryTag};
pub use detail::DetailState;
pub use error::TourError;
