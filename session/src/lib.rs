//! FILENAME: session/src/lib.rs
//! Storelens Session Context
//!
//! `ExplorerSession` is the owned, explicitly-passed context object for one
//! exploration session: it holds the loaded Dataset, the current DateRange
//! and FilterSelection, and the FilteredView resolved from them. There is
//! no ambient global; callers own the session and thread it through.
//!
//! Every mutation re-resolves the view from scratch — synchronous,
//! single-threaded, no incremental update or caching. Recomputation is
//! linear in row count, which is cheap at interactive dataset sizes.

mod error;
mod snapshot;

pub use error::SessionError;
pub use snapshot::DashboardSnapshot;

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;

use dataset::Dataset;
use filter_engine::{
    date_filtered, resolve_domains, resolve_view, DateRange, FilterDomains, FilterSelection,
    FilteredView,
};

// ============================================================================
// EXPLORER SESSION
// ============================================================================

/// One user's exploration session over a loaded dataset.
#[derive(Debug, Clone)]
pub struct ExplorerSession {
    dataset: Dataset,
    date_range: DateRange,
    selection: FilterSelection,
    view: FilteredView,
}

impl ExplorerSession {
    /// Creates a session over an already-loaded dataset. The date range
    /// defaults to the dataset's full order-date span; the selection
    /// starts unconstrained.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, SessionError> {
        if dataset.is_empty() {
            return Err(SessionError::EmptyDataset);
        }
        let (min, max) = dataset.date_span().ok_or(SessionError::NoOrderDates)?;

        let date_range = DateRange::new(min, max);
        let selection = FilterSelection::new();
        let view = resolve_view(&dataset, &date_range, &selection);

        Ok(ExplorerSession {
            dataset,
            date_range,
            selection,
            view,
        })
    }

    /// Loads a delimited (CSV/TXT) file and opens a session over it.
    pub fn load_delimited(path: &Path) -> Result<Self, SessionError> {
        Self::from_dataset(persistence::load_delimited(path)?)
    }

    /// Loads an XLS/XLSX workbook and opens a session over it.
    pub fn load_xls(path: &Path) -> Result<Self, SessionError> {
        Self::from_dataset(persistence::load_xls(path)?)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// The current FilteredView. Recomputed on every mutation; never stale.
    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// The date-filtered view with no dimensional narrowing (feeds the
    /// summary sample and the Region option list).
    pub fn base_view(&self) -> FilteredView {
        date_filtered(&self.dataset, &self.date_range)
    }

    /// The selectable option lists for all three cascade levels under the
    /// current selection.
    pub fn domains(&self) -> FilterDomains {
        resolve_domains(&self.dataset, &self.date_range, &self.selection)
    }

    pub fn region_options(&self) -> Vec<String> {
        self.domains().regions
    }

    pub fn state_options(&self) -> Vec<String> {
        self.domains().states
    }

    pub fn city_options(&self) -> Vec<String> {
        self.domains().cities
    }

    // ========================================================================
    // MUTATIONS (each re-resolves the view)
    // ========================================================================

    /// Sets the inclusive date range. Reversed bounds are normalized.
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.date_range = DateRange::new(start, end);
        self.prune_selection();
        self.recompute();
    }

    /// Replaces the Region selection. State and City selections that are
    /// no longer offered by the narrowed cascade are dropped, matching a
    /// UI that rebuilds its downstream multiselects.
    pub fn set_regions(&mut self, regions: Vec<String>) {
        self.selection.regions = regions;
        self.prune_selection();
        self.recompute();
    }

    /// Replaces the State selection; stale City selections are dropped.
    pub fn set_states(&mut self, states: Vec<String>) {
        self.selection.states = states;
        self.prune_selection();
        self.recompute();
    }

    /// Replaces the City selection.
    pub fn set_cities(&mut self, cities: Vec<String>) {
        self.selection.cities = cities;
        self.recompute();
    }

    /// Clears all three dimensional selections (keeps the date range).
    pub fn clear_selection(&mut self) {
        self.selection = FilterSelection::new();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = resolve_view(&self.dataset, &self.date_range, &self.selection);
        log::debug!(
            "resolved view: {} of {} rows (regions={}, states={}, cities={})",
            self.view.len(),
            self.dataset.len(),
            self.selection.regions.len(),
            self.selection.states.len(),
            self.selection.cities.len(),
        );
    }

    /// Drops selected values no longer present in their cascade domain.
    fn prune_selection(&mut self) {
        let domains = resolve_domains(&self.dataset, &self.date_range, &self.selection);

        let keep = |selected: &mut Vec<String>, offered: &[String]| {
            let offered: HashSet<&str> = offered.iter().map(String::as_str).collect();
            selected.retain(|v| offered.contains(v.as_str()));
        };
        keep(&mut self.selection.regions, &domains.regions);
        keep(&mut self.selection.states, &domains.states);

        // City domain may have shifted again after state pruning.
        let domains = resolve_domains(&self.dataset, &self.date_range, &self.selection);
        keep(&mut self.selection.cities, &domains.cities);
    }

    // ========================================================================
    // DERIVED OUTPUT
    // ========================================================================

    /// Builds the full set of derived tables for the current view.
    pub fn snapshot(&self) -> DashboardSnapshot {
        snapshot::build_snapshot(&self.dataset, &self.base_view(), &self.view)
    }

    // ========================================================================
    // EXPORTS (download-button payloads)
    // ========================================================================

    /// The current filtered dataset as delimited text.
    pub fn export_filtered(&self) -> Result<String, SessionError> {
        Ok(persistence::records_to_csv_string(&self.dataset, &self.view)?)
    }

    /// Category-wise sales as delimited text.
    pub fn export_category_sales(&self) -> Result<String, SessionError> {
        let rows = aggregate_engine::category_sales(&self.dataset, &self.view);
        Ok(persistence::breakdown_to_csv_string("Category", &rows)?)
    }

    /// Region-wise sales as delimited text.
    pub fn export_region_sales(&self) -> Result<String, SessionError> {
        let rows = aggregate_engine::region_sales(&self.dataset, &self.view);
        Ok(persistence::breakdown_to_csv_string("Region", &rows)?)
    }

    /// Segment-wise sales as delimited text.
    pub fn export_segment_sales(&self) -> Result<String, SessionError> {
        let rows = aggregate_engine::segment_sales(&self.dataset, &self.view);
        Ok(persistence::breakdown_to_csv_string("Segment", &rows)?)
    }

    /// The monthly time series as delimited text.
    pub fn export_time_series(&self) -> Result<String, SessionError> {
        let rows = aggregate_engine::monthly_sales(&self.dataset, &self.view);
        Ok(persistence::timeseries_to_csv_string(&rows)?)
    }
}
