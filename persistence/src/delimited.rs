//! FILENAME: persistence/src/delimited.rs
//! PURPOSE: Loads sales datasets from delimited text (CSV/TXT).
//! CONTEXT: Comma-delimited with a header row; .txt uploads go through the
//! same reader. Unparseable order dates coerce to `None` and are counted,
//! never raised; numeric garbage is a hard error naming the row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use dataset::{parse_order_date, Dataset, Record};

use crate::error::PersistenceError;
use crate::{parse_integer, parse_number, ColumnMap, COL_PROFIT, COL_QUANTITY, COL_SALES};

/// Loads a dataset from a delimited file on disk.
pub fn load_delimited(path: &Path) -> Result<Dataset, PersistenceError> {
    let file = File::open(path)?;
    read_delimited(file)
}

/// Reads a dataset from any delimited text source.
pub fn read_delimited<R: Read>(source: R) -> Result<Dataset, PersistenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let map = ColumnMap::from_headers(&headers)?;

    let mut dataset = Dataset::new();
    let mut coerced_dates = 0usize;

    for (index, result) in reader.records().enumerate() {
        // Row numbers are 1-based and count the header.
        let row = index + 2;
        let record = result?;
        let field = |col: usize| record.get(col).unwrap_or("");

        let raw_date = field(map.order_date);
        let order_date = parse_order_date(raw_date);
        if order_date.is_none() && !raw_date.trim().is_empty() {
            coerced_dates += 1;
        }

        dataset.push(Record {
            order_date,
            region: field(map.region).trim().to_string(),
            state: field(map.state).trim().to_string(),
            city: field(map.city).trim().to_string(),
            category: field(map.category).trim().to_string(),
            sub_category: field(map.sub_category).trim().to_string(),
            segment: field(map.segment).trim().to_string(),
            sales: parse_number(field(map.sales), row, COL_SALES)?,
            profit: parse_number(field(map.profit), row, COL_PROFIT)?,
            quantity: parse_integer(field(map.quantity), row, COL_QUANTITY)?,
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
