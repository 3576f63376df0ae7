//! Range selection state machine.
//!
//! Weekends can never be a range endpoint. A click after a completed range
//! always starts a new one; there is no way to extend an existing range.

use chrono::NaiveDate;

use crate::calendar::{date_range, format_iso, is_weekend, weekend_dates};
use crate::types::{FinalizedRange, SelectionState};

impl SelectionState {
    /// Apply a click on `date`.
    ///
    /// Returns the next state and, when the click completes a range, the
    /// finalized range to report. Weekend clicks leave the state unchanged.
    pub fn on_cell_click(self, date: NaiveDate) -> (SelectionState, Option<FinalizedRange>) {
        if is_weekend(date) {
            tracing::trace!(%date, "weekend click ignored");
            return (self, None);
        }

        match self {
            SelectionState::StartOnly(start) if date >= start => {
                let range = FinalizedRange::between(start, date);
                tracing::debug!(%start, end = %date, weekends = range.weekends.len(), "range complete");
                (SelectionState::Complete(start, date), Some(range))
            }
            // Empty, an earlier date than the start, or a restart after Complete
            _ => {
                tracing::debug!(%date, previous = ?self, "range start");
                (SelectionState::StartOnly(date), None)
            }
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            SelectionState::Empty => None,
            SelectionState::StartOnly(start) | SelectionState::Complete(start, _) => Some(start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            SelectionState::Complete(_, end) => Some(end),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SelectionState::Complete(..))
    }

    /// Whether `date` lies in a completed range. A lone start highlights nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            SelectionState::Complete(start, end) => (start..=end).contains(&date),
            _ => false,
        }
    }
}

impl FinalizedRange {
    /// Finalize `start..=end`, collecting the weekend days inside it.
    ///
    /// Returns `None` when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then(|| FinalizedRange::between(start, end))
    }

    /// Callers guarantee `start <= end`.
    pub(crate) fn between(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "range start {start} after end {end}");
        FinalizedRange {
            start,
            end,
            weekends: weekend_dates(start, end),
        }
    }

    /// `[start, end]` as ISO dates.
    pub fn range_strings(&self) -> [String; 2] {
        [format_iso(self.start), format_iso(self.end)]
    }

    pub fn weekend_strings(&self) -> Vec<String> {
        self.weekends.iter().copied().map(format_iso).collect()
    }

    /// Number of days in the range, endpoints included.
    pub fn len_days(&self) -> usize {
        date_range(self.start, self.end).count()
    }
}

impl std::fmt::Display for FinalizedRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ~ {}", format_iso(self.start), format_iso(self.end))
    }
}
