//! Errors raised at the configuration and input boundary.

use thiserror::Error;

use crate::types::ShortcutKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    #[error("Unknown shortcut kind: {0}")]
    UnknownShortcut(String),

    #[error("Malformed shortcut descriptor: {0} (expected LABEL=KIND)")]
    MalformedShortcut(String),

    #[error("No shortcut button labelled {0:?}")]
    UnknownShortcutLabel(String),

    #[error("Shortcut {0:?} is not configured")]
    ShortcutUnavailable(ShortcutKind),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid year: {0} (must be 1-9999)")]
    InvalidYear(String),

    #[error("{0}")]
    ConflictingOptions(String),
}
