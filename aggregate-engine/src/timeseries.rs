//! FILENAME: aggregate-engine/src/timeseries.rs
//! PURPOSE: Monthly sales time series.
//! CONTEXT: Groups the FilteredView by the year+month truncation of the
//! order date and sums Sales per month. Rows are sorted by `MonthKey`,
//! which compares (year, month) numerically. Sorting the "YYYY-Mon"
//! labels instead would misorder months within a year and break at
//! year boundaries ("2023-Dec" vs "2024-Jan").

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use dataset::{Dataset, MonthKey};
use filter_engine::FilteredView;

/// One month of the time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRow {
    pub key: MonthKey,
    /// Display label, e.g. "2023-Feb".
    pub label: String,
    pub sales: f64,
}

/// Month-by-month sales for the view, in true calendar order.
/// Rows without a parseable order date cannot reach this function: the
/// date filter already dropped them from every view.
pub fn monthly_sales(dataset: &Dataset, view: &FilteredView) -> Vec<TimeSeriesRow> {
    let mut sums: FxHashMap<MonthKey, f64> = FxHashMap::default();
    for record in view.records(dataset) {
        if let Some(date) = record.order_date {
            *sums.entry(MonthKey::from_date(date)).or_insert(0.0) += record.sales;
        }
    }

    let mut rows: Vec<TimeSeriesRow> = sums
        .into_iter()
        .map(|(key, sales)| TimeSeriesRow {
            key,
            label: key.label(),
            sales,
        })
        .collect();
    rows.sort_by_key(|row| row.key);
    rows
}
