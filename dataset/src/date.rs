//! FILENAME: dataset/src/date.rs
//! PURPOSE: Order-date parsing and calendar month keys.
//! CONTEXT: Source files carry order dates as day-month-year text. Parsing
//! failures coerce to `None` rather than erroring. `MonthKey` is the
//! year+month truncation used by the time series; its `Ord` is derived
//! from (year, month) so sorting is true calendar order, not the
//! lexicographic order of labels like "2023-Feb".

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Full calendar month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Abbreviated month names used in time-series labels.
pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parses an order date from day-month-year text.
/// Accepts `-` or `/` separators. Returns `None` for anything else,
/// matching the "coerce, never raise" contract of the loader.
pub fn parse_order_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .ok()
}

/// A year+month truncation of an order date.
/// Derived `Ord` compares (year, month), which is calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Display label in "YYYY-Mon" form, e.g. "2023-Feb".
    /// `month` is a public field, so out-of-range values label with the
    /// raw number instead of panicking.
    pub fn label(&self) -> String {
        match MONTH_ABBREV.get(self.month.wrapping_sub(1) as usize) {
            Some(abbrev) => format!("{}-{}", self.year, abbrev),
            None => format!("{}-{}", self.year, self.month),
        }
    }

    /// Full calendar month name, e.g. "February". Empty for out-of-range
    /// months.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES
            .get(self.month.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or("")
    }
}
