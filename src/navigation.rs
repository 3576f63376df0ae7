//! Month and year navigation of the displayed view.
//!
//! Navigation only moves the [`ViewCursor`]; selection state is untouched.

use chrono::{Datelike, NaiveDate};

use crate::calendar::month_short_name;
use crate::types::{MONTHS_PER_YEAR, ViewCursor, YEAR_CHOICE_RADIUS};

impl ViewCursor {
    /// Cursor for a year and a month index that may lie outside `0..=11`.
    pub fn normalized(year: i32, month_index: i32) -> Self {
        let total = i64::from(year) * i64::from(MONTHS_PER_YEAR) + i64::from(month_index);
        let months = i64::from(MONTHS_PER_YEAR);
        ViewCursor {
            year: total
                .div_euclid(months)
                .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            month_index: total.rem_euclid(months) as u32,
        }
    }

    /// Cursor showing the month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        ViewCursor {
            year: date.year(),
            month_index: date.month0(),
        }
    }

    /// Move by `step` months (+1 next, -1 previous), wrapping across years.
    pub fn advance_month(self, step: i32) -> Self {
        let month_index = (self.month_index as i32).saturating_add(step);
        let cursor = ViewCursor::normalized(self.year, month_index);
        tracing::trace!(from = ?self, to = ?cursor, "advance month");
        cursor
    }

    /// Same month, different year.
    pub fn select_year(self, year: i32) -> Self {
        ViewCursor { year, ..self }
    }

    /// Years offered by the year-choice overlay, centred on the displayed year.
    pub fn available_years(self) -> Vec<i32> {
        let first = self.year.saturating_sub(YEAR_CHOICE_RADIUS);
        let last = self.year.saturating_add(YEAR_CHOICE_RADIUS);
        (first..=last).collect()
    }

    /// Header text such as `Mar, 2024`.
    pub fn headline(self) -> String {
        format!("{}, {}", month_short_name(self.month_index), self.year)
    }
}
