//! Type definitions and constants for the range picker.

use chrono::NaiveDate;
use clap::ValueEnum;

/// Predefined range computed backwards from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ShortcutKind {
    /// Today and the six days before it.
    #[value(name = "last7days", alias = "last-7-days")]
    Last7Days,
    /// Today and the twenty-nine days before it.
    #[value(name = "last30days", alias = "last-30-days")]
    Last30Days,
}

impl ShortcutKind {
    /// Number of days covered by the range, today included.
    pub fn day_count(self) -> u32 {
        match self {
            ShortcutKind::Last7Days => 7,
            ShortcutKind::Last30Days => 30,
        }
    }

    /// Button label used when no custom label is configured.
    pub fn default_label(self) -> &'static str {
        match self {
            ShortcutKind::Last7Days => "Last 7 Days",
            ShortcutKind::Last30Days => "Last 30 Days",
        }
    }
}

/// A shortcut button: what it shows and which range it computes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutDescriptor {
    pub label: String,
    pub kind: ShortcutKind,
}

impl ShortcutDescriptor {
    pub fn new(label: impl Into<String>, kind: ShortcutKind) -> Self {
        ShortcutDescriptor {
            label: label.into(),
            kind,
        }
    }
}

/// Widget configuration supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Shortcut buttons, in display order. Empty disables shortcuts.
    pub shortcuts: Vec<ShortcutDescriptor>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            shortcuts: [ShortcutKind::Last7Days, ShortcutKind::Last30Days]
                .into_iter()
                .map(|kind| ShortcutDescriptor::new(kind.default_label(), kind))
                .collect(),
        }
    }
}

/// Range selection progress.
///
/// `start <= end` holds for `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    StartOnly(NaiveDate),
    Complete(NaiveDate, NaiveDate),
}

/// A completed range together with the weekend days inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Saturdays and Sundays within `start..=end`, ascending.
    pub weekends: Vec<NaiveDate>,
}

/// The (year, zero-based month) pair currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ViewCursor {
    pub year: i32,
    /// Month index in `0..=11`.
    pub month_index: u32,
}

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for leading/trailing days borrowed from adjacent months.
    pub current_month: bool,
}

/// Monday-first week of grid cells.
pub type GridWeek = [GridCell; DAYS_PER_WEEK];

/// Weeks of a displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: ViewCursor,
    pub weeks: Vec<GridWeek>,
}

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// A range was finalized, by clicks or by a shortcut.
    RangeChanged(FinalizedRange),
    /// The user accepted the current selection.
    Confirmed,
}

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: u32 = 12;

// Years listed on each side of the displayed year in the year overlay
pub const YEAR_CHOICE_RADIUS: i32 = 10;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
pub const RANGE_PLACEHOLDER: &str = "yyyy-MM-dd ~ yyyy-MM-dd";

pub const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
pub const WEEKDAY_SHORT_NAMES: [&str; DAYS_PER_WEEK] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

// Width of a rendered week row: seven 2-char cells plus separators
pub const GRID_WIDTH: usize = 20;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
