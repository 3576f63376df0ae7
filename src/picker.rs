//! The picker widget: selection, view cursor and shortcut buttons together.
//!
//! Every interaction is handled synchronously and returns the event (if
//! any) the host should react to.

use chrono::NaiveDate;

use crate::calendar::is_weekend;
use crate::error::PickerError;
use crate::shortcut::apply_shortcut;
use crate::types::{
    MonthGrid, PickerConfig, PickerEvent, SelectionState, ShortcutDescriptor, ShortcutKind,
    ViewCursor,
};

#[derive(Debug, Clone)]
pub struct DateRangePicker {
    config: PickerConfig,
    selection: SelectionState,
    cursor: ViewCursor,
    /// Whether the year-choice overlay is open.
    year_choice_open: bool,
    /// Reference date for shortcuts; the view opens on its month.
    today: NaiveDate,
}

impl DateRangePicker {
    pub fn new(config: PickerConfig, today: NaiveDate) -> Self {
        DateRangePicker {
            config,
            selection: SelectionState::Empty,
            cursor: ViewCursor::containing(today),
            year_choice_open: false,
            today,
        }
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn cursor(&self) -> ViewCursor {
        self.cursor
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn shortcuts(&self) -> &[ShortcutDescriptor] {
        &self.config.shortcuts
    }

    pub fn is_year_choice_open(&self) -> bool {
        self.year_choice_open
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::new(self.cursor)
    }

    /// Weekend cells cannot be clicked.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        is_weekend(date)
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selection.contains(date)
    }

    /// Click a date. Emits `RangeChanged` when the click completes a range.
    pub fn click(&mut self, date: NaiveDate) -> Option<PickerEvent> {
        let (next, finalized) = self.selection.on_cell_click(date);
        self.selection = next;
        finalized.map(PickerEvent::RangeChanged)
    }

    /// Click the cell at `(week, column)` of the displayed month.
    ///
    /// Positions outside the grid are ignored.
    pub fn click_cell(&mut self, week: usize, column: usize) -> Option<PickerEvent> {
        let cell = self.month_grid().cell_at(week, column)?;
        self.click(cell.date)
    }

    /// Press a shortcut button. Only configured shortcuts can be pressed.
    pub fn apply_shortcut(&mut self, kind: ShortcutKind) -> Result<PickerEvent, PickerError> {
        if !self.config.shortcuts.iter().any(|s| s.kind == kind) {
            return Err(PickerError::ShortcutUnavailable(kind));
        }
        let range = apply_shortcut(kind, self.today);
        self.selection = SelectionState::from(&range);
        Ok(PickerEvent::RangeChanged(range))
    }

    /// Press the shortcut button with the given label.
    pub fn apply_shortcut_labelled(&mut self, label: &str) -> Result<PickerEvent, PickerError> {
        let kind = self
            .config
            .shortcuts
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.kind)
            .ok_or_else(|| PickerError::UnknownShortcutLabel(label.to_string()))?;
        self.apply_shortcut(kind)
    }

    /// The OK button. Carries no data; the range was reported on completion.
    pub fn confirm(&self) -> PickerEvent {
        tracing::debug!(selection = ?self.selection, "selection confirmed");
        PickerEvent::Confirmed
    }

    /// Jump the view to another month. A month index past 11 rolls into
    /// the following years.
    pub fn show(&mut self, cursor: ViewCursor) {
        let month_index = i32::try_from(cursor.month_index).unwrap_or(i32::MAX);
        self.cursor = ViewCursor::normalized(cursor.year, month_index);
    }

    pub fn previous_month(&mut self) {
        self.cursor = self.cursor.advance_month(-1);
    }

    pub fn next_month(&mut self) {
        self.cursor = self.cursor.advance_month(1);
    }

    pub fn advance_month(&mut self, step: i32) {
        self.cursor = self.cursor.advance_month(step);
    }

    pub fn toggle_year_choice(&mut self) {
        self.year_choice_open = !self.year_choice_open;
    }

    /// Years listed in the year-choice overlay.
    pub fn available_years(&self) -> Vec<i32> {
        self.cursor.available_years()
    }

    /// Show `year` and close the year-choice overlay.
    pub fn select_year(&mut self, year: i32) {
        self.cursor = self.cursor.select_year(year);
        self.year_choice_open = false;
    }
}
