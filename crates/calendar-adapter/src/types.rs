//! Shared types for the calendar adapter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Class token the widget stamps on non-selectable (past or padding) cells.
pub const INVALID_DAY_CLASS: &str = "WinvalidDay";

/// Month tokens the widget renders in its month control, 1-based.
pub const MONTH_TOKENS: [&str; 12] = [
    "一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二",
];

/// Token for a 1..=12 month number, `None` outside that range.
pub fn month_token(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    MONTH_TOKENS.get(index).copied()
}

/// Date triple recovered from a cell's `day_Click` handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HandlerDate {
    /// Calendar date for this triple, if it denotes a real day.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for HandlerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Raw year and month values currently shown by the widget's header controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Year as a numeral string, exactly as the control renders it.
    pub year: String,
    /// Month as the localized token from [`MONTH_TOKENS`].
    pub month_token: String,
}

/// One observed deviation from the expected widget state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mismatch {
    /// Displayed year differs from the reference date's year.
    YearMismatch { expected: String, actual: String },
    /// Displayed month token differs from the reference date's month.
    MonthMismatch { expected: String, actual: String },
    /// Handlerless cell whose class is not exactly the invalid token.
    PastCellClass { text: String, class: Option<String> },
    /// Handlerless-classified cell that still carries an onclick attribute.
    PastCellHasHandler { text: String, handler: String },
    /// Selectable cell carrying the invalid class token.
    FutureCellClass {
        date: HandlerDate,
        text: String,
        class: String,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::YearMismatch { expected, actual } => {
                write!(f, "displayed year '{actual}' (expected '{expected}')")
            }
            Mismatch::MonthMismatch { expected, actual } => {
                write!(f, "displayed month '{actual}' (expected '{expected}')")
            }
            Mismatch::PastCellClass { text, class } => write!(
                f,
                "past cell '{text}' has class {class:?} (expected '{INVALID_DAY_CLASS}')"
            ),
            Mismatch::PastCellHasHandler { text, handler } => {
                write!(f, "past cell '{text}' carries handler '{handler}'")
            }
            Mismatch::FutureCellClass { date, text, class } => write!(
                f,
                "selectable cell '{text}' ({date}) carries invalid class '{class}'"
            ),
        }
    }
}

/// Aggregate outcome of one validation pass. Empty means the widget
/// conformed; all deviations from a pass are collected, not just the first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub mismatches: Vec<Mismatch>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub(crate) fn push(&mut self, mismatch: Mismatch) {
        self.mismatches.push(mismatch);
    }
}

/// Outcome of a random selection. The click already landed in either case;
/// `Unknown` means the clicked cell's handler no longer parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectedDate {
    Known(HandlerDate),
    Unknown,
}

/// Bounded waits for widget interactions.
#[derive(Clone, Copy, Debug)]
pub struct CalendarTimeouts {
    /// Wait for header controls to become visible.
    pub read: Duration,
    /// Wait for a click target cell to appear.
    pub click: Duration,
}

impl Default for CalendarTimeouts {
    fn default() -> Self {
        Self {
            read: Duration::from_secs(5),
            click: Duration::from_secs(10),
        }
    }
}
