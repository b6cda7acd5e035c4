//! FILENAME: session/src/snapshot.rs
//! PURPOSE: The serializable bundle of every derived table.
//! CONTEXT: One snapshot per recomputation: the frontend renders its six
//! chart panels and the summary table from a single snapshot, so derived
//! tables are always mutually consistent for one view.

use serde::{Deserialize, Serialize};

use aggregate_engine::{
    category_sales, monthly_sales, month_subcategory_pivot, region_sales, sales_hierarchy,
    scatter_points, segment_sales, summary_sample, BreakdownRow, MonthPivot, ScatterPoint,
    TimeSeriesRow, TreemapNode, DEFAULT_SAMPLE_SIZE,
};
use dataset::{Dataset, Record};
use filter_engine::FilteredView;

/// Every derived table for one FilteredView.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Rows in the filtered view the tables were computed from.
    pub row_count: usize,
    pub category_sales: Vec<BreakdownRow>,
    pub region_sales: Vec<BreakdownRow>,
    pub segment_sales: Vec<BreakdownRow>,
    pub time_series: Vec<TimeSeriesRow>,
    pub treemap: Vec<TreemapNode>,
    pub month_pivot: MonthPivot,
    pub scatter: Vec<ScatterPoint>,
    /// Sample rows for the summary table, drawn from the date-filtered
    /// dataset (not the dimensionally narrowed view).
    pub summary_sample: Vec<Record>,
}

/// Computes every derived table from scratch.
/// `base_view` is the date-filtered view (summary sample source);
/// `view` is the fully narrowed FilteredView the aggregations consume.
pub fn build_snapshot(
    dataset: &Dataset,
    base_view: &FilteredView,
    view: &FilteredView,
) -> DashboardSnapshot {
    let sample_rows = summary_sample(base_view, DEFAULT_SAMPLE_SIZE);
    let summary = sample_rows
        .iter()
        .filter_map(|&i| dataset.get(i).cloned())
        .collect();

    DashboardSnapshot {
        row_count: view.len(),
        category_sales: category_sales(dataset, view),
        region_sales: region_sales(dataset, view),
        segment_sales: segment_sales(dataset, view),
        time_series: monthly_sales(dataset, view),
        treemap: sales_hierarchy(dataset, view),
        month_pivot: month_subcategory_pivot(dataset, view),
        scatter: scatter_points(dataset, view),
        summary_sample: summary,
    }
}
