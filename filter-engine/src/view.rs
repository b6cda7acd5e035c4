//! FILENAME: filter-engine/src/view.rs
//! Filtered View - The resolved row subset and selectable option domains.
//!
//! A FilteredView is a pure function of (Dataset, DateRange, FilterSelection)
//! and carries no identity across recomputations. It stores row indices into
//! the Dataset rather than cloned records, in original dataset order.

use serde::{Deserialize, Serialize};

use dataset::{Dataset, Record};

// ============================================================================
// FILTERED VIEW
// ============================================================================

/// The subset of Dataset rows satisfying the active filters.
/// Row indices are always sorted in original dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredView {
    pub rows: Vec<usize>,
}

impl FilteredView {
    pub fn new(rows: Vec<usize>) -> Self {
        FilteredView { rows }
    }

    /// A view containing every row of the dataset.
    pub fn all(dataset: &Dataset) -> Self {
        FilteredView {
            rows: (0..dataset.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates the records this view selects, in dataset order.
    pub fn records<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Record> + 'a {
        self.rows.iter().filter_map(move |&i| dataset.get(i))
    }

    /// Clones the selected records out of the dataset (used by exports
    /// and the snapshot, where an owned sequence is needed).
    pub fn to_records(&self, dataset: &Dataset) -> Vec<Record> {
        self.records(dataset).cloned().collect()
    }
}

// ============================================================================
// FILTER DOMAINS
// ============================================================================

/// The selectable option lists offered for each cascade level.
/// Regions come from the date-filtered view, states from the
/// region-narrowed view, cities from the state-narrowed view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDomains {
    pub regions: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
}
