use thiserror::Error;

/// Errors for the index-based contracts (catalog rows, picker rows).
///
/// The error surface is deliberately tiny: there is no I/O in the core and
/// every other construction path is valid by design.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourError {
    #[error("index {index} out of range (valid: 0..{len})")]
    OutOfRange { index: usize, len: usize },
}
