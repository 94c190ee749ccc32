use thiserror::Error;

/// Errors returned by the scanners shipped with this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The row and the destination list have different lengths.
    #[error("expected {expected} destination(s), got {actual}")]
    ColumnCount { expected: usize, actual: usize },

    /// A column value does not have the destination's type.
    #[error("column {index}: cannot store {value} into this destination")]
    TypeMismatch { index: usize, value: &'static str },

    /// The row was already consumed by an earlier scan.
    #[error("row already scanned")]
    Consumed,
}
