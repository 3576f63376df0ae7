//! Weekday date-range picker.
//!
//! Features:
//! - Monday-first month grid with days from adjacent months
//! - Range selection where weekends can not be an endpoint
//! - Weekend days inside a finalized range reported alongside it
//! - "Last 7 days" / "Last 30 days" shortcuts and month/year navigation

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod navigation;
pub mod picker;
pub mod selection;
pub mod shortcut;
pub mod types;
