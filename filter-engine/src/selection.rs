//! FILENAME: filter-engine/src/selection.rs
//! Filter Selection - The serializable filter state.
//!
//! This module contains the types that DESCRIBE what the user picked:
//! an inclusive date range and one value list per cascade level. An empty
//! value list always means "no constraint on this dimension", never
//! "match nothing".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// DATE RANGE
// ============================================================================

/// An inclusive order-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, normalizing reversed bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Whether a record's order date falls inside the range.
    /// Records without a parseable date never match.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        match date {
            Some(d) => self.start <= d && d <= self.end,
            None => false,
        }
    }
}

// ============================================================================
// FILTER SELECTION
// ============================================================================

/// The three hierarchical value selections: Region, State, City.
/// Each list is either empty (pass-through) or a subset of the values
/// offered by the corresponding cascade level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub regions: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

impl FilterSelection {
    /// Creates a selection with no constraints.
    pub fn new() -> Self {
        FilterSelection::default()
    }

    /// True when every dimension is pass-through.
    pub fn is_unconstrained(&self) -> bool {
        self.regions.is_empty() && self.states.is_empty() && self.cities.is_empty()
    }
}
