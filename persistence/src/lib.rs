//! FILENAME: persistence/src/lib.rs
//! Storelens Persistence Module
//!
//! Handles loading sales datasets from delimited text (CSV/TXT) and
//! spreadsheet files (XLS/XLSX), and exporting datasets and aggregate
//! tables back to delimited text.

mod delimited;
mod error;
mod export;
mod xls_reader;

pub use delimited::{load_delimited, read_delimited};
pub use error::PersistenceError;
pub use export::{
    breakdown_to_csv_string, records_to_csv_string, timeseries_to_csv_string, write_breakdown,
    write_records, write_timeseries,
};
pub use xls_reader::load_xls;

// ============================================================================
// COLUMN NAMES (header names expected in source files)
// ============================================================================

pub const COL_ORDER_DATE: &str = "Order Date";
pub const COL_REGION: &str = "Region";
pub const COL_STATE: &str = "State";
pub const COL_CITY: &str = "City";
pub const COL_CATEGORY: &str = "Category";
pub const COL_SUB_CATEGORY: &str = "Sub-Category";
pub const COL_SEGMENT: &str = "Segment";
pub const COL_SALES: &str = "Sales";
pub const COL_PROFIT: &str = "Profit";
pub const COL_QUANTITY: &str = "Quantity";

/// Every column a source file must carry, in export order.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    COL_ORDER_DATE,
    COL_REGION,
    COL_STATE,
    COL_CITY,
    COL_CATEGORY,
    COL_SUB_CATEGORY,
    COL_SEGMENT,
    COL_SALES,
    COL_PROFIT,
    COL_QUANTITY,
];

// ============================================================================
// COLUMN MAP
// ============================================================================

/// Positions of the required columns within a source header row.
/// Shared by the delimited and spreadsheet readers; extra columns in the
/// source are ignored.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub order_date: usize,
    pub region: usize,
    pub state: usize,
    pub city: usize,
    pub category: usize,
    pub sub_category: usize,
    pub segment: usize,
    pub sales: usize,
    pub profit: usize,
    pub quantity: usize,
}

impl ColumnMap {
    /// Builds a map from a header row. Header matching is exact after
    /// trimming surrounding whitespace.
    pub fn from_headers(headers: &[String]) -> Result<Self, PersistenceError> {
        let position = |name: &str| -> Result<usize, PersistenceError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| PersistenceError::MissingColumn(name.to_string()))
        };

        Ok(ColumnMap {
            order_date: position(COL_ORDER_DATE)?,
            region: position(COL_REGION)?,
            state: position(COL_STATE)?,
            city: position(COL_CITY)?,
            category: position(COL_CATEGORY)?,
            sub_category: position(COL_SUB_CATEGORY)?,
            segment: position(COL_SEGMENT)?,
            sales: position(COL_SALES)?,
            profit: position(COL_PROFIT)?,
            quantity: position(COL_QUANTITY)?,
        })
    }
}

// ============================================================================
// NUMERIC PARSING (shared by readers)
// ============================================================================

/// Parses a numeric cell. Blank cells coerce to zero; anything else that
/// fails to parse is a hard error naming the offending row and column.
pub(crate) fn parse_number(
    raw: &str,
    row: usize,
    column: &str,
) -> Result<f64, PersistenceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| PersistenceError::InvalidNumber {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

/// Parses an integer cell, accepting float-formatted text ("3.0") since
/// spreadsheet exports often write integers that way.
pub(crate) fn parse_integer(
    raw: &str,
    row: usize,
    column: &str,
) -> Result<i64, PersistenceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    parse_number(raw, row, column).map(|f| f.round() as i64)
}
