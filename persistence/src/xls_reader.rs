//! FILENAME: persistence/src/xls_reader.rs
//! PURPOSE: Loads sales datasets from XLS/XLSX workbooks.
//! CONTEXT: Reads the first worksheet, treating its first row as headers.
//! Spreadsheet date cells arrive either as serial numbers, as ISO text,
//! or as day-month-year strings; all three are handled, and anything
//! unparseable coerces to a missing date like the delimited reader.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Duration, NaiveDate};

use dataset::{parse_order_date, Dataset, Record};

use crate::error::PersistenceError;
use crate::{parse_integer, parse_number, ColumnMap, COL_PROFIT, COL_QUANTITY, COL_SALES};

/// Loads a dataset from the first sheet of an XLS/XLSX workbook.
pub fn load_xls(path: &Path) -> Result<Dataset, PersistenceError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| PersistenceError::InvalidFormat("Workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or(PersistenceError::EmptyInput)?;
    let headers: Vec<String> = header_row.iter().map(cell_text).collect();
    let map = ColumnMap::from_headers(&headers)?;

    let mut dataset = Dataset::new();
    let mut coerced_dates = 0usize;

    for (index, cells) in rows.enumerate() {
        // 1-based, counting the header row.
        let row = index + 2;
        let cell = |col: usize| cells.get(col).unwrap_or(&Data::Empty);

        let order_date = cell_date(cell(map.order_date));
        if order_date.is_none() && !matches!(cell(map.order_date), Data::Empty) {
            coerced_dates += 1;
        }

        dataset.push(Record {
            order_date,
            region: cell_text(cell(map.region)),
            state: cell_text(cell(map.state)),
            city: cell_text(cell(map.city)),
            category: cell_text(cell(map.category)),
            sub_category: cell_text(cell(map.sub_category)),
            segment: cell_text(cell(map.segment)),
            sales: cell_number(cell(map.sales), row, COL_SALES)?,
            profit: cell_number(cell(map.profit), row, COL_PROFIT)?,
            quantity: cell_number(cell(map.quantity), row, COL_QUANTITY)?.round() as i64,
        });
    }

    if dataset.is_empty() {
        return Err(PersistenceError::EmptyInput);
    }
    if coerced_dates > 0 {
        log::warn!(
            "coerced {} unparseable order date(s) to missing during import",
            coerced_dates
        );
    }

    Ok(dataset)
}

/// Text content of a cell, with numbers rendered plainly.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{:.0}", f)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("{:?}", e),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Numeric content of a cell. Empty coerces to zero; text is parsed the
/// same way the delimited reader parses it.
fn cell_number(cell: &Data, row: usize, column: &str) -> Result<f64, PersistenceError> {
    match cell {
        Data::Empty => Ok(0.0),
        Data::Float(f) => Ok(*f),
        Data::Int(i) => Ok(*i as f64),
        Data::String(s) => parse_number(s, row, column),
        Data::DateTime(dt) => Ok(dt.as_f64()),
        other => Err(PersistenceError::InvalidNumber {
            row,
            column: column.to_string(),
            value: cell_text(other),
        }),
    }
}

/// Order-date content of a cell.
fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64()),
        Data::Float(f) => excel_serial_to_date(*f),
        Data::Int(i) => excel_serial_to_date(*i as f64),
        Data::String(s) => parse_order_date(s),
        // ISO text: take the date part. `get` keeps malformed multibyte
        // text from splitting a char boundary.
        Data::DateTimeIso(s) => {
            NaiveDate::parse_from_str(s.get(..10).unwrap_or(s), "%Y-%m-%d").ok()
        }
        _ => None,
    }
}

/// Converts an Excel serial day number to a date.
/// Excel day 0 is 1899-12-30 (the 1900 leap-year bug is baked into the
/// epoch offset).
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}
