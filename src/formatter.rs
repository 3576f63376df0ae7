//! Text rendering of the picker: headline, day grid, year overlay, buttons
//! and the reported range.

use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

use crate::calendar::format_iso;
use crate::picker::DateRangePicker;
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL,
    DAYS_PER_WEEK, FinalizedRange, GRID_WIDTH, GridCell, RANGE_PLACEHOLDER, ShortcutDescriptor,
    ViewCursor, WEEKDAY_SHORT_NAMES,
};

const YEARS_PER_ROW: usize = 4;

/// Headline with navigation arrows, e.g. `<     Mar, 2024    >`.
pub fn format_headline(cursor: ViewCursor, width: usize, color: bool) -> String {
    let inner = center_text(&cursor.headline(), width.saturating_sub(2));
    if color {
        format!("<{}{}{}>", COLOR_TEAL, inner, COLOR_RESET)
    } else {
        format!("<{}>", inner)
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Weekday header row, Monday first.
pub fn format_weekday_headers(color: bool) -> String {
    let names = WEEKDAY_SHORT_NAMES.join(" ");
    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, names, COLOR_RESET)
    } else {
        names
    }
}

/// Format day cell with color highlighting.
///
/// Color priority: selected > weekend > today > outside month > regular
fn format_day(picker: &DateRangePicker, cell: GridCell, color: bool, is_last: bool) -> String {
    let day_str = format!("{:>2}", cell.date.day());

    let formatted = if !color {
        day_str
    } else if picker.is_selected(cell.date) {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if picker.is_disabled(cell.date) {
        format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
    } else if cell.date == picker.today() {
        format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
    } else if !cell.current_month {
        format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
    } else {
        day_str
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format the displayed month as lines: headline, weekday header, weeks.
pub fn format_month_grid(picker: &DateRangePicker, color: bool) -> Vec<String> {
    let grid = picker.month_grid();
    let mut lines = Vec::with_capacity(grid.weeks.len() + 2);

    lines.push(format_headline(grid.cursor, GRID_WIDTH, color));
    lines.push(format_weekday_headers(color));

    for week in &grid.weeks {
        let line: String = week
            .iter()
            .enumerate()
            .map(|(i, &cell)| format_day(picker, cell, color, i + 1 == DAYS_PER_WEEK))
            .collect();
        lines.push(line);
    }

    lines
}

/// Year-choice overlay, displayed year highlighted.
pub fn format_year_choice(picker: &DateRangePicker, color: bool) -> Vec<String> {
    let current = picker.cursor().year;
    picker
        .available_years()
        .chunks(YEARS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|&year| {
                    if year == current {
                        if color {
                            format!("{}{:>4}{}", COLOR_REVERSE, year, COLOR_RESET)
                        } else {
                            format!("*{year}")
                        }
                    } else {
                        format!("{:>4}", year)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Shortcut buttons followed by the OK button.
pub fn format_buttons(shortcuts: &[ShortcutDescriptor]) -> String {
    shortcuts
        .iter()
        .map(|s| s.label.as_str())
        .chain(std::iter::once("OK"))
        .map(|label| format!("[{}]", label))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Range:` and `Weekends:` report lines.
pub fn format_report(range: Option<&FinalizedRange>) -> Vec<String> {
    match range {
        Some(range) => {
            let weekends = if range.weekends.is_empty() {
                "-".to_string()
            } else {
                range.weekend_strings().join(", ")
            };
            vec![format!("Range: {}", range), format!("Weekends: {}", weekends)]
        }
        None => vec![format!("Range: {}", RANGE_PLACEHOLDER)],
    }
}

/// Render the whole picker, with the last reported range if any.
pub fn format_picker(
    picker: &DateRangePicker,
    reported: Option<&FinalizedRange>,
    color: bool,
) -> Vec<String> {
    let mut lines = format_month_grid(picker, color);
    if picker.is_year_choice_open() {
        lines.push(String::new());
        lines.extend(format_year_choice(picker, color));
    }
    lines.push(String::new());
    lines.push(format_buttons(picker.shortcuts()));
    if let Some(start) = picker.selection().start()
        && !picker.selection().is_complete()
    {
        lines.push(format!("Start: {}", format_iso(start)));
    }
    lines.extend(format_report(reported));
    lines
}

pub fn print_picker(picker: &DateRangePicker, reported: Option<&FinalizedRange>, color: bool) {
    for line in format_picker(picker, reported, color) {
        println!("{}", line);
    }
}
