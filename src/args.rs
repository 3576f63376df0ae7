//! Command-line argument parsing using clap.
//!
//! Arguments follow cal convention for the view: `[month] [year]`.

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use std::io::IsTerminal;

use crate::calendar::parse_iso;
use crate::error::PickerError;
use crate::types::{PickerConfig, ShortcutDescriptor, ShortcutKind, ViewCursor};

#[derive(Parser, Debug)]
#[command(name = "rangecal")]
#[command(about = "Pick a weekday date range and report the weekends inside it", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Click a date (YYYY-MM-DD); repeat to click several times, in order.
    #[arg(long = "click", value_name = "date", help_heading = "Selection options")]
    pub clicks: Vec<String>,

    /// Press a shortcut button before any clicks (last7days or last30days).
    #[arg(long, value_name = "kind", help_heading = "Selection options")]
    pub shortcut: Option<String>,

    /// Press OK after the selection.
    #[arg(long, help_heading = "Selection options")]
    pub confirm: bool,

    /// Shortcut button as LABEL=KIND; replaces the default buttons.
    #[arg(
        long = "shortcut-button",
        value_name = "label=kind",
        help_heading = "Configuration"
    )]
    pub shortcut_buttons: Vec<String>,

    /// Disable shortcut buttons.
    #[arg(long, help_heading = "Configuration")]
    pub no_shortcuts: bool,

    /// Reference date used as today (YYYY-MM-DD).
    #[arg(long, value_name = "date", help_heading = "Configuration")]
    pub today: Option<String>,

    /// Move the view by this many months (negative goes back).
    #[arg(
        long,
        value_name = "months",
        allow_negative_numbers = true,
        help_heading = "View options"
    )]
    pub advance: Option<i32>,

    /// Pick a year from the year list.
    #[arg(long, value_name = "year", help_heading = "View options")]
    pub select_year: Option<String>,

    /// Open the year list.
    #[arg(long, help_heading = "View options")]
    pub years: bool,

    /// Month (1-12 or name) or, with four digits, the year.
    #[arg(index = 1, value_name = "month")]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, value_name = "year")]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(
        long,
        default_value = "warn",
        value_name = "level",
        help_heading = "Output options"
    )]
    pub log_level: String,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Weekends can not be picked as the start or end of a range.
Clicking a date before the current start starts over from that date, and
clicking after a completed range starts a new one.

Examples:
  rangecal                                       Show the current month
  rangecal 3 2024                                Show March 2024
  rangecal --click 2024-03-04 --click 2024-03-08 Select a range
  rangecal --shortcut last7days                  Select the last 7 days
  rangecal --advance -1                          Show the previous month
  rangecal --years                               Show the year list";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Validated settings for one picker session.
#[derive(Clone, Debug)]
pub struct RunContext {
    pub config: PickerConfig,
    pub today: NaiveDate,
    /// Month shown before navigation options are applied.
    pub cursor: ViewCursor,
    pub clicks: Vec<NaiveDate>,
    pub shortcut: Option<ShortcutKind>,
    pub advance: i32,
    pub select_year: Option<i32>,
    pub show_years: bool,
    pub confirm: bool,
    pub color: bool,
}

impl RunContext {
    pub fn new(args: &Args) -> Result<Self, PickerError> {
        let today = match &args.today {
            Some(s) => parse_iso(s)?,
            None => get_today_date(),
        };

        if args.no_shortcuts && !args.shortcut_buttons.is_empty() {
            return Err(PickerError::ConflictingOptions(
                "Options --no-shortcuts and --shortcut-button are mutually exclusive".to_string(),
            ));
        }

        let config = if args.no_shortcuts {
            PickerConfig { shortcuts: Vec::new() }
        } else if args.shortcut_buttons.is_empty() {
            PickerConfig::default()
        } else {
            PickerConfig {
                shortcuts: args
                    .shortcut_buttons
                    .iter()
                    .map(|s| s.parse::<ShortcutDescriptor>())
                    .collect::<Result<_, _>>()?,
            }
        };

        let clicks = args
            .clicks
            .iter()
            .map(|s| parse_iso(s))
            .collect::<Result<Vec<_>, _>>()?;

        let select_year = args.select_year.as_deref().map(parse_year).transpose()?;

        let shortcut = args
            .shortcut
            .as_deref()
            .map(str::parse::<ShortcutKind>)
            .transpose()?;

        Ok(RunContext {
            config,
            today,
            cursor: get_display_cursor(args, today)?,
            clicks,
            shortcut,
            advance: args.advance.unwrap_or(0),
            select_year,
            show_years: args.years,
            confirm: args.confirm,
            color: !args.no_color && std::io::stdout().is_terminal(),
        })
    }
}

/// Get today's date, respecting RANGECAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("RANGECAL_TEST_TIME")
        && let Ok(date) = parse_iso(&test_time)
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

fn parse_year(s: &str) -> Result<i32, PickerError> {
    let year: i32 = s
        .parse()
        .map_err(|_| PickerError::InvalidYear(s.to_string()))?;
    if !(1..=9999).contains(&year) {
        return Err(PickerError::InvalidYear(s.to_string()));
    }
    Ok(year)
}

/// Parse month from string (numeric 1-12 or English name), 1-based.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    const MONTH_NAMES: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let s_lower = s.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| *name == s_lower || (s_lower.len() == 3 && name.starts_with(&s_lower)))
        .map(|i| i as u32 + 1)
}

/// Calculate the initial view from positional arguments.
///
/// Argument patterns:
/// - no args: today's month
/// - 1 arg: year (4 digits) or month
/// - 2 args: month year
pub fn get_display_cursor(args: &Args, today: NaiveDate) -> Result<ViewCursor, PickerError> {
    let month_of = |s: &str| {
        parse_month(s)
            .map(|m| m - 1)
            .ok_or_else(|| PickerError::InvalidMonth(s.to_string()))
    };

    match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (None, _) => Ok(ViewCursor::containing(today)),
        (Some(val), None) => {
            // 4 digits = year
            if val.len() == 4 && val.chars().all(|c| c.is_ascii_digit()) {
                return Ok(ViewCursor {
                    year: parse_year(val)?,
                    month_index: today.month0(),
                });
            }
            Ok(ViewCursor {
                year: today.year(),
                month_index: month_of(val)?,
            })
        }
        (Some(month), Some(year)) => Ok(ViewCursor {
            year: parse_year(year)?,
            month_index: month_of(month)?,
        }),
    }
}
