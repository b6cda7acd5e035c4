//! FILENAME: dataset/src/record.rs
//! PURPOSE: Defines the fundamental data structure for a single sales row.
//! CONTEXT: This file contains the `Record` struct and the `Dimension` enum
//! used to address its categorical columns generically. A Record keeps the
//! parsed order date separate from the raw source text: unparseable dates
//! become `None` and simply never match a date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The categorical columns of a record.
/// Filtering and grouping code addresses columns through this enum instead
/// of hard-coding field access per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Region,
    State,
    City,
    Category,
    SubCategory,
    Segment,
}

/// One row of the uploaded sales dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Parsed order date. `None` means the source text was unparseable;
    /// such rows are treated as non-matching by date filters.
    pub order_date: Option<NaiveDate>,
    pub region: String,
    pub state: String,
    pub city: String,
    pub category: String,
    pub sub_category: String,
    pub segment: String,
    pub sales: f64,
    pub profit: f64,
    pub quantity: i64,
}

impl Record {
    /// Returns the value of a categorical column.
    pub fn dimension(&self, dim: Dimension) -> &str {
        match dim {
            Dimension::Region => &self.region,
            Dimension::State => &self.state,
            Dimension::City => &self.city,
            Dimension::Category => &self.category,
            Dimension::SubCategory => &self.sub_category,
            Dimension::Segment => &self.segment,
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Record {
            order_date: None,
            region: String::new(),
            state: String::new(),
            city: String::new(),
            category: String::new(),
            sub_category: String::new(),
            segment: String::new(),
            sales: 0.0,
            profit: 0.0,
            quantity: 0,
        }
    }
}
