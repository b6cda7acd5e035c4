//! FILENAME: aggregate-engine/src/scatter.rs
//! PURPOSE: Raw scatter data for the sales/profit relationship chart.
//! CONTEXT: No aggregation here: one point per FilteredView row, in view
//! order. Quantity rides along as the point-size channel.

use serde::{Deserialize, Serialize};

use dataset::Dataset;
use filter_engine::FilteredView;

/// One scatter point: a single record's numeric triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub sales: f64,
    pub profit: f64,
    pub quantity: i64,
}

/// The (sales, profit, quantity) triples of the view, one per row.
pub fn scatter_points(dataset: &Dataset, view: &FilteredView) -> Vec<ScatterPoint> {
    view.records(dataset)
        .map(|record| ScatterPoint {
            sales: record.sales,
            profit: record.profit,
            quantity: record.quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::Record;

    #[test]
    fn test_one_point_per_row_in_view_order() {
        let dataset = Dataset::from_records(vec![
            Record { sales: 10.0, profit: 2.0, quantity: 1, ..Record::default() },
            Record { sales: 20.0, profit: -1.0, quantity: 3, ..Record::default() },
            Record { sales: 30.0, profit: 5.0, quantity: 2, ..Record::default() },
        ]);

        let points = scatter_points(&dataset, &FilteredView::new(vec![2, 0]));
        // View order is dataset order of the selected rows as given.
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].sales, 30.0);
        assert_eq!(points[1].profit, 2.0);
        assert_eq!(points[1].quantity, 1);
    }
}
