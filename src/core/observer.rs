//! Observer seam between the core state machines and the status line.
//!
//! Each notifying component holds at most one observer. Notifications carry
//! the new display string only and are lossy: a missed value is simply
//! overwritten by the next one, since only the latest value is ever shown.
//! Notifying with no observer registered is a silent no-op.

/// Single registered recipient of display-string notifications.
pub type Observer = Box<dyn FnMut(&str)>;
