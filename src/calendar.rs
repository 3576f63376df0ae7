//! Calendar arithmetic and month grid construction.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::error::PickerError;
use crate::types::{
    DAYS_PER_WEEK, GridCell, GridWeek, ISO_DATE_FORMAT, MONTH_SHORT_NAMES, MonthGrid, ViewCursor,
};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First day of the month, or `None` outside chrono's representable range.
pub fn first_of_month(cursor: ViewCursor) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(cursor.year, cursor.month_index + 1, 1)
}

/// Last day of the month, or `None` outside chrono's representable range.
pub fn last_of_month(cursor: ViewCursor) -> Option<NaiveDate> {
    let first = first_of_month(cursor)?;
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.pred_opt(),
        // December of the last representable year has no following month
        None => NaiveDate::from_ymd_opt(cursor.year, 12, 31),
    }
}

/// Every date in `start..=end`, ascending. Empty when `start > end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}

/// Saturdays and Sundays in `start..=end`, ascending.
pub fn weekend_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    date_range(start, end).filter(|&date| is_weekend(date)).collect()
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_iso(s: &str) -> Result<NaiveDate, PickerError> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
        .map_err(|_| PickerError::InvalidDate(s.to_string()))
}

/// Fixed three-letter English month name for a zero-based month index.
pub fn month_short_name(month_index: u32) -> &'static str {
    MONTH_SHORT_NAMES[(month_index % 12) as usize]
}

/// Build the Monday-first weeks covering a month.
///
/// `month_index` is zero-based; out-of-range values roll into the
/// neighbouring years, so `(2024, 12)` is January 2025 and `(2024, -1)`
/// is December 2023. Returns no weeks when the month, or any day of its
/// leading or trailing weeks, lies outside the representable calendar.
pub fn build_grid(year: i32, month_index: i32) -> Vec<GridWeek> {
    let cursor = ViewCursor::normalized(year, month_index);
    let (Some(first), Some(last)) = (first_of_month(cursor), last_of_month(cursor)) else {
        return Vec::new();
    };

    // Walk back to the Monday on or before the 1st
    let lead = u64::from(first.weekday().num_days_from_monday());
    let Some(mut week_start) = first.checked_sub_days(Days::new(lead)) else {
        return Vec::new();
    };

    let mut weeks = Vec::with_capacity(6);
    // Whole weeks only, so the cursor is back on a Monday after each one
    while week_start <= last {
        let cells: Vec<GridCell> = week_start
            .iter_days()
            .take(DAYS_PER_WEEK)
            .map(|date| GridCell {
                date,
                current_month: date.year() == cursor.year && date.month0() == cursor.month_index,
            })
            .collect();
        // A short week means the calendar ends mid-week
        let Ok(week) = GridWeek::try_from(cells) else {
            return Vec::new();
        };
        weeks.push(week);

        match week_start.checked_add_days(Days::new(DAYS_PER_WEEK as u64)) {
            Some(next) => week_start = next,
            None => break,
        }
    }
    weeks
}

impl MonthGrid {
    /// Build grid data for the month under the cursor.
    pub fn new(cursor: ViewCursor) -> Self {
        MonthGrid {
            cursor,
            weeks: build_grid(cursor.year, cursor.month_index as i32),
        }
    }

    /// Cell at `(week, column)`, column 0 being Monday.
    pub fn cell_at(&self, week: usize, column: usize) -> Option<GridCell> {
        self.weeks.get(week)?.get(column).copied()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.weeks.first().map(|week| week[0].date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.weeks.last().map(|week| week[DAYS_PER_WEEK - 1].date)
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flatten()
    }
}
