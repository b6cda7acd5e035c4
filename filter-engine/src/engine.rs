//! FILENAME: filter-engine/src/engine.rs
//! Filter Engine - Resolves a selection into the FilteredView.
//!
//! Algorithm:
//! 1. Date filter: keep rows whose order date lies inside the range;
//!    rows without a parseable date are dropped silently.
//! 2. Cascade: the region-narrowed view supplies the selectable State
//!    options, the state-narrowed view supplies the selectable City
//!    options.
//! 3. Combination: starting from the date-filtered view, fold over the
//!    Region, State, City dimensions, narrowing by set membership for
//!    each non-empty selection. An empty selection passes every row
//!    through, so all eight empty/non-empty combinations collapse into
//!    this single fold.

use std::collections::HashSet;

use dataset::{Dataset, Dimension};

use crate::selection::{DateRange, FilterSelection};
use crate::view::{FilterDomains, FilteredView};

// ============================================================================
// RESOLUTION
// ============================================================================

/// Applies the date filter: the base view every narrowing starts from.
pub fn date_filtered(dataset: &Dataset, range: &DateRange) -> FilteredView {
    let rows = dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| range.contains(record.order_date))
        .map(|(index, _)| index)
        .collect();
    FilteredView::new(rows)
}

/// Narrows a view to rows whose `dim` value is a member of `values`.
/// An empty `values` list means "no constraint": the view is returned
/// unchanged. This pass-through is the load-bearing rule of the whole
/// filter model; membership-in-empty-set would wrongly drop every row.
pub fn narrow(
    dataset: &Dataset,
    view: &FilteredView,
    dim: Dimension,
    values: &[String],
) -> FilteredView {
    if values.is_empty() {
        return view.clone();
    }
    let allowed: HashSet<&str> = values.iter().map(String::as_str).collect();
    let rows = view
        .rows
        .iter()
        .copied()
        .filter(|&i| {
            dataset
                .get(i)
                .map(|record| allowed.contains(record.dimension(dim)))
                .unwrap_or(false)
        })
        .collect();
    FilteredView::new(rows)
}

/// Resolves the final FilteredView for a selection.
/// Equivalent to enumerating all eight empty/non-empty combinations of
/// (regions, states, cities): each active dimension is combined with
/// logical AND, each empty one is ignored.
pub fn resolve_view(
    dataset: &Dataset,
    range: &DateRange,
    selection: &FilterSelection,
) -> FilteredView {
    let mut view = date_filtered(dataset, range);
    for (dim, values) in [
        (Dimension::Region, &selection.regions),
        (Dimension::State, &selection.states),
        (Dimension::City, &selection.cities),
    ] {
        view = narrow(dataset, &view, dim, values);
    }
    view
}

// ============================================================================
// OPTION DOMAINS
// ============================================================================

/// Unique values of a dimension within a view, in first-appearance order.
pub fn unique_values(dataset: &Dataset, view: &FilteredView, dim: Dimension) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for record in view.records(dataset) {
        let value = record.dimension(dim);
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Computes the selectable option lists for all three cascade levels.
/// States are restricted to the region-narrowed view and cities to the
/// state-narrowed view, so downstream options always reflect upstream
/// selections.
pub fn resolve_domains(
    dataset: &Dataset,
    range: &DateRange,
    selection: &FilterSelection,
) -> FilterDomains {
    let base = date_filtered(dataset, range);
    let regions = unique_values(dataset, &base, Dimension::Region);

    let region_narrowed = narrow(dataset, &base, Dimension::Region, &selection.regions);
    let states = unique_values(dataset, &region_narrowed, Dimension::State);

    let state_narrowed = narrow(dataset, &region_narrowed, Dimension::State, &selection.states);
    let cities = unique_values(dataset, &state_narrowed, Dimension::City);

    FilterDomains {
        regions,
        states,
        cities,
    }
}
