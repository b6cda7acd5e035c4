//! FILENAME: aggregate-engine/src/lib.rs
//! Aggregation subsystem for Storelens.
//!
//! Every module here is a pure function of (Dataset, FilteredView): the
//! derived tables feeding the dashboard's chart panels. Nothing is cached;
//! callers recompute whenever the view changes, which is linear in row
//! count and cheap at interactive dataset sizes.
//!
//! Views:
//! - `breakdown`: label/sum tables (category, region, segment)
//! - `timeseries`: monthly sales in true calendar order
//! - `treemap`: Region -> Category -> Sub-Category hierarchy
//! - `pivot`: month x sub-category sales matrix
//! - `scatter`: raw (sales, profit, quantity) triples
//! - `sample`: the deterministic summary-table row sample

pub mod breakdown;
pub mod pivot;
pub mod sample;
pub mod scatter;
pub mod timeseries;
pub mod treemap;

pub use breakdown::{category_sales, region_sales, sales_by_dimension, segment_sales, BreakdownRow};
pub use pivot::{month_subcategory_pivot, MonthPivot, MonthPivotRow};
pub use sample::{summary_sample, summary_sample_seeded, DEFAULT_SAMPLE_SIZE};
pub use scatter::{scatter_points, ScatterPoint};
pub use timeseries::{monthly_sales, TimeSeriesRow};
pub use treemap::{sales_hierarchy, TreemapNode};
