//! FILENAME: persistence/src/export.rs
//! PURPOSE: Serializes datasets and aggregate tables to delimited text.
//! CONTEXT: Exports power the dashboard's download buttons. Record export
//! writes the same headers and day-month-year date format the importer
//! expects, so an exported view re-imports as the same row multiset.

use std::io::Write;

use aggregate_engine::{BreakdownRow, TimeSeriesRow};
use dataset::{Dataset, Record};
use filter_engine::FilteredView;

use crate::error::PersistenceError;
use crate::REQUIRED_COLUMNS;

const EXPORT_DATE_FORMAT: &str = "%d-%m-%Y";

// ============================================================================
// RECORD EXPORT
// ============================================================================

/// Writes the view's records as delimited text with a header row.
/// Records without a parseable order date export an empty date field.
pub fn write_records<W: Write>(
    writer: W,
    dataset: &Dataset,
    view: &FilteredView,
) -> Result<(), PersistenceError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(REQUIRED_COLUMNS)?;
    for record in view.records(dataset) {
        out.write_record(record_fields(record))?;
    }
    out.flush()?;
    Ok(())
}

/// Record export into an owned string (the download-button payload).
pub fn records_to_csv_string(
    dataset: &Dataset,
    view: &FilteredView,
) -> Result<String, PersistenceError> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, dataset, view)?;
    String::from_utf8(buffer).map_err(|e| PersistenceError::InvalidFormat(e.to_string()))
}

fn record_fields(record: &Record) -> [String; 10] {
    [
        record
            .order_date
            .map(|d| d.format(EXPORT_DATE_FORMAT).to_string())
            .unwrap_or_default(),
        record.region.clone(),
        record.state.clone(),
        record.city.clone(),
        record.category.clone(),
        record.sub_category.clone(),
        record.segment.clone(),
        format_float(record.sales),
        format_float(record.profit),
        record.quantity.to_string(),
    ]
}

/// Formats a float without trailing ".0" noise for whole values.
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

// ============================================================================
// AGGREGATE TABLE EXPORT
// ============================================================================

/// Writes a breakdown table as delimited text. `label_header` names the
/// grouping column ("Category", "Region", "Segment").
pub fn write_breakdown<W: Write>(
    writer: W,
    label_header: &str,
    rows: &[BreakdownRow],
) -> Result<(), PersistenceError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([label_header, "Sales"])?;
    for row in rows {
        out.write_record([row.label.as_str(), &format_float(row.sales)])?;
    }
    out.flush()?;
    Ok(())
}

/// Breakdown export into an owned string.
pub fn breakdown_to_csv_string(
    label_header: &str,
    rows: &[BreakdownRow],
) -> Result<String, PersistenceError> {
    let mut buffer = Vec::new();
    write_breakdown(&mut buffer, label_header, rows)?;
    String::from_utf8(buffer).map_err(|e| PersistenceError::InvalidFormat(e.to_string()))
}

/// Writes the monthly time series as delimited text.
pub fn write_timeseries<W: Write>(
    writer: W,
    rows: &[TimeSeriesRow],
) -> Result<(), PersistenceError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["Month", "Sales"])?;
    for row in rows {
        out.write_record([row.label.as_str(), &format_float(row.sales)])?;
    }
    out.flush()?;
    Ok(())
}

/// Time-series export into an owned string.
pub fn timeseries_to_csv_string(rows: &[TimeSeriesRow]) -> Result<String, PersistenceError> {
    let mut buffer = Vec::new();
    write_timeseries(&mut buffer, rows)?;
    String::from_utf8(buffer).map_err(|e| PersistenceError::InvalidFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::parse_order_date;

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            Record {
                order_date: parse_order_date("05-01-2023"),
                region: "West".to_string(),
                state: "California".to_string(),
                city: "Los Angeles".to_string(),
                category: "Furniture".to_string(),
                sub_category: "Chairs".to_string(),
                segment: "Consumer".to_string(),
                sales: 100.5,
                profit: 20.0,
                quantity: 2,
            },
            Record {
                order_date: None,
                region: "East".to_string(),
                ..Record::default()
            },
        ])
    }

    #[test]
    fn test_record_export_header_and_rows() {
        let dataset = sample_dataset();
        let text = records_to_csv_string(&dataset, &FilteredView::all(&dataset)).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Order Date,Region,State,City,Category,Sub-Category,Segment,Sales,Profit,Quantity"
        );
        assert_eq!(
            lines.next().unwrap(),
            "05-01-2023,West,California,Los Angeles,Furniture,Chairs,Consumer,100.5,20,2"
        );
        // Missing date exports as an empty field.
        assert!(lines.next().unwrap().starts_with(",East,"));
    }

    #[test]
    fn test_record_export_reimports_identically() {
        let dataset = sample_dataset();
        let view = FilteredView::all(&dataset);
        let text = records_to_csv_string(&dataset, &view).unwrap();

        let reloaded = crate::read_delimited(text.as_bytes()).unwrap();
        assert_eq!(reloaded.records, dataset.records);
    }

    #[test]
    fn test_breakdown_export() {
        let rows = vec![
            BreakdownRow { label: "Furniture".to_string(), sales: 125.0 },
            BreakdownRow { label: "Technology".to_string(), sales: 50.5 },
        ];
        let text = breakdown_to_csv_string("Category", &rows).unwrap();
        assert_eq!(text, "Category,Sales\nFurniture,125\nTechnology,50.5\n");
    }

    #[test]
    fn test_export_empty_view_is_header_only() {
        let dataset = sample_dataset();
        let text = records_to_csv_string(&dataset, &FilteredView::new(Vec::new())).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
