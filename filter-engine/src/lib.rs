//! FILENAME: filter-engine/src/lib.rs
//! Cascading Filter subsystem for Storelens.
//!
//! This crate resolves a (Dataset, DateRange, FilterSelection) triple into
//! the FilteredView that every aggregation consumes. It depends on
//! `dataset` only for shared types.
//!
//! Layers:
//! - `selection`: Serializable filter state (what the user picked)
//! - `view`: The resolved row subset and the selectable option domains
//! - `engine`: Resolution logic (how the cascade and combination work)

pub mod engine;
pub mod selection;
pub mod view;

pub use engine::{date_filtered, narrow, resolve_domains, resolve_view, unique_values};
pub use selection::{DateRange, FilterSelection};
pub use view::{FilterDomains, FilteredView};
