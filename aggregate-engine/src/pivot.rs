//! FILENAME: aggregate-engine/src/pivot.rs
//! PURPOSE: Month x Sub-Category sales pivot.
//! CONTEXT: Rows are sub-categories (ascending), columns are the calendar
//! month names present in the view (January -> December order), and each
//! cell is the Sales sum for that combination. A combination with no rows
//! is `None`, never zero: an absent month is distinguishable from a month
//! that sold nothing.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use dataset::{Dataset, MonthKey};
use filter_engine::FilteredView;

/// One sub-category row of the pivot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPivotRow {
    /// Sub-category label.
    pub label: String,
    /// One cell per pivot column, `None` where the combination is absent.
    pub cells: Vec<Option<f64>>,
}

/// The month x sub-category pivot table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthPivot {
    /// Full month names for the months present, in calendar order.
    /// Months from different years aggregate into the same column.
    pub columns: Vec<String>,
    /// Rows sorted ascending by sub-category label.
    pub rows: Vec<MonthPivotRow>,
}

/// Builds the month x sub-category pivot for the view.
pub fn month_subcategory_pivot(dataset: &Dataset, view: &FilteredView) -> MonthPivot {
    let mut months_present: FxHashSet<u32> = FxHashSet::default();
    let mut sums: FxHashMap<(String, u32), f64> = FxHashMap::default();
    let mut sub_categories: Vec<String> = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for record in view.records(dataset) {
        let month = match record.order_date {
            Some(date) => MonthKey::from_date(date).month,
            None => continue,
        };
        months_present.insert(month);
        if seen.insert(record.sub_category.clone()) {
            sub_categories.push(record.sub_category.clone());
        }
        *sums.entry((record.sub_category.clone(), month)).or_insert(0.0) += record.sales;
    }

    let mut month_numbers: Vec<u32> = months_present.into_iter().collect();
    month_numbers.sort_unstable();
    sub_categories.sort();

    let columns = month_numbers
        .iter()
        .map(|&m| dataset::MONTH_NAMES[(m - 1) as usize].to_string())
        .collect();

    let rows = sub_categories
        .into_iter()
        .map(|label| {
            let cells = month_numbers
                .iter()
                .map(|&month| sums.get(&(label.clone(), month)).copied())
                .collect();
            MonthPivotRow { label, cells }
        })
        .collect();

    MonthPivot { columns, rows }
}
