//! FILENAME: dataset/src/dataset.rs
//! PURPOSE: The ordered collection of records loaded from user input.
//! CONTEXT: A Dataset is loaded wholesale and never mutated afterwards by
//! the engines; filters and aggregations reference its rows by index.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// The ordered, immutable-after-load collection of sales records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    /// Creates a new, empty Dataset.
    pub fn new() -> Self {
        Dataset { records: Vec::new() }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the (min, max) parsed order dates across all records,
    /// or `None` when no record carries a parseable date.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut span: Option<(NaiveDate, NaiveDate)> = None;
        for record in &self.records {
            if let Some(date) = record.order_date {
                span = Some(match span {
                    None => (date, date),
                    Some((min, max)) => (min.min(date), max.max(date)),
                });
            }
        }
        span
    }
}
