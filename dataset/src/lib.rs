//! FILENAME: dataset/src/lib.rs
//! Storelens Dataset Model
//!
//! This crate defines the core data model shared by every other crate in
//! the workspace: a single sales `Record`, the immutable `Dataset` loaded
//! from user input, and the calendar helpers used to derive month-level
//! keys from order dates. It contains no filtering or aggregation logic.

pub mod dataset;
pub mod date;
pub mod record;

pub use dataset::Dataset;
pub use date::{parse_order_date, MonthKey, MONTH_ABBREV, MONTH_NAMES};
pub use record::{Dimension, Record};
