//! FILENAME: aggregate-engine/src/breakdown.rs
//! PURPOSE: Label/sum breakdown tables (category-, region-, segment-wise sales).
//! CONTEXT: A breakdown groups the FilteredView by one categorical column
//! and sums Sales per group. Groups are sorted ascending by label, matching
//! the group-by ordering of the source system this replaces.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use dataset::{Dataset, Dimension};
use filter_engine::FilteredView;

/// One group of a breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub label: String,
    pub sales: f64,
}

/// Groups the view by one categorical column and sums Sales per group.
/// Returns one row per distinct value, sorted ascending by label.
pub fn sales_by_dimension(
    dataset: &Dataset,
    view: &FilteredView,
    dim: Dimension,
) -> Vec<BreakdownRow> {
    let mut sums: FxHashMap<&str, f64> = FxHashMap::default();
    for record in view.records(dataset) {
        *sums.entry(record.dimension(dim)).or_insert(0.0) += record.sales;
    }

    let mut rows: Vec<BreakdownRow> = sums
        .into_iter()
        .map(|(label, sales)| BreakdownRow {
            label: label.to_string(),
            sales,
        })
        .collect();
    rows.sort_by(|a, b| a.label.cmp(&b.label));
    rows
}

/// Category-wise sales.
pub fn category_sales(dataset: &Dataset, view: &FilteredView) -> Vec<BreakdownRow> {
    sales_by_dimension(dataset, view, Dimension::Category)
}

/// Region-wise sales.
pub fn region_sales(dataset: &Dataset, view: &FilteredView) -> Vec<BreakdownRow> {
    sales_by_dimension(dataset, view, Dimension::Region)
}

/// Segment-wise sales.
pub fn segment_sales(dataset: &Dataset, view: &FilteredView) -> Vec<BreakdownRow> {
    sales_by_dimension(dataset, view, Dimension::Segment)
}
