//! Error types for timetable operations.

use thiserror::Error;

use crate::types::ClassName;

/// Errors returned by registry, schedule, query, and codec operations.
///
/// Every variant is recoverable and reported to the caller; the engine never
/// panics on bad input and never leaves grid and index partially updated when
/// an operation fails.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// Empty or malformed input (names, subjects, class names).
    #[error("invalid input: {0}")]
    Validation(String),

    /// Key collision on add or rename.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// Reference to an unknown teacher or class.
    #[error("not found: {0}")]
    NotFound(String),

    /// Double-booking attempt; carries the class already holding the slot.
    #[error("already assigned at that slot in class {class}")]
    Conflict { class: ClassName },

    /// Malformed persisted document.
    #[error("malformed document: {0}")]
    Format(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimetableError>;
