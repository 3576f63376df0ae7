//! Predefined ranges ("last 7 days", "last 30 days").
//!
//! Shortcut ranges skip the click rules: their endpoints may fall on a
//! weekend, and the weekend list is computed the same way as for clicks.

use std::str::FromStr;

use chrono::{Days, NaiveDate};
use clap::ValueEnum;

use crate::error::PickerError;
use crate::types::{FinalizedRange, SelectionState, ShortcutDescriptor, ShortcutKind};

impl FromStr for ShortcutKind {
    type Err = PickerError;

    /// Accepts `last7days`, `last7Days` and `last-7-days` (same for 30).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <ShortcutKind as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| PickerError::UnknownShortcut(s.to_string()))
    }
}

impl FromStr for ShortcutDescriptor {
    type Err = PickerError;

    /// Parse `LABEL=KIND`, e.g. `Past week=last7days`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, kind) = s
            .split_once('=')
            .ok_or_else(|| PickerError::MalformedShortcut(s.to_string()))?;
        let label = label.trim();
        if label.is_empty() {
            return Err(PickerError::MalformedShortcut(s.to_string()));
        }
        Ok(ShortcutDescriptor::new(label, kind.parse()?))
    }
}

/// Range of `kind.day_count()` days ending on `reference` (today).
pub fn apply_shortcut(kind: ShortcutKind, reference: NaiveDate) -> FinalizedRange {
    let back = Days::new(u64::from(kind.day_count() - 1));
    let start = reference.checked_sub_days(back).unwrap_or(NaiveDate::MIN);
    let range = FinalizedRange::between(start, reference);
    tracing::debug!(?kind, %range, weekends = range.weekends.len(), "shortcut applied");
    range
}

impl From<&FinalizedRange> for SelectionState {
    fn from(range: &FinalizedRange) -> Self {
        SelectionState::Complete(range.start, range.end)
    }
}
