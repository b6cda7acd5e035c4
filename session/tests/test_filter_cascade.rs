//! FILENAME: session/tests/test_filter_cascade.rs
//! Integration tests for date filtering, cascading option domains, and
//! filter combination through the session context.

mod common;

use chrono::NaiveDate;
use common::{sample_session, strings};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// DATE FILTER
// ============================================================================

#[test]
fn test_default_range_covers_all_dated_rows() {
    let session = sample_session();
    // Eight rows carry parseable dates; the ninth never matches.
    assert_eq!(session.view().len(), 8);
    assert_eq!(session.view().rows, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_date_range_is_inclusive() {
    let mut session = sample_session();
    session.set_date_range(date(2023, 12, 2), date(2023, 12, 27));
    assert_eq!(session.view().rows, vec![2, 3, 4]);
}

#[test]
fn test_date_range_outside_data_yields_empty_view() {
    let mut session = sample_session();
    session.set_date_range(date(2020, 1, 1), date(2020, 12, 31));
    assert!(session.view().is_empty());
    // Aggregations degrade to empty rather than failing.
    let snapshot = session.snapshot();
    assert_eq!(snapshot.row_count, 0);
    assert!(snapshot.category_sales.is_empty());
}

// ============================================================================
// PASS-THROUGH AND COMBINATION
// ============================================================================

#[test]
fn test_empty_selection_is_identity() {
    let session = sample_session();
    assert!(session.selection().is_unconstrained());
    assert_eq!(*session.view(), session.base_view());
}

#[test]
fn test_region_selection_membership() {
    let mut session = sample_session();
    session.set_regions(strings(&["West"]));

    assert_eq!(session.view().rows, vec![0, 1, 2]);
    assert!(session
        .view()
        .records(session.dataset())
        .all(|r| r.region == "West"));
}

#[test]
fn test_state_only_selection_crosses_regions() {
    let mut session = sample_session();
    // California rows exist in both West and East; with no region picked,
    // both must appear.
    session.set_states(strings(&["California"]));
    assert_eq!(session.view().rows, vec![0, 1, 4]);
}

#[test]
fn test_combined_selection_is_logical_and() {
    let mut session = sample_session();
    session.set_regions(strings(&["West"]));
    session.set_states(strings(&["California"]));
    session.set_cities(strings(&["San Francisco"]));
    assert_eq!(session.view().rows, vec![1]);
}

#[test]
fn test_constraints_narrow_monotonically() {
    let mut session = sample_session();
    let unconstrained = session.view().len();

    session.set_regions(strings(&["West"]));
    let after_region = session.view().len();
    assert!(after_region <= unconstrained);

    session.set_states(strings(&["California"]));
    let after_state = session.view().len();
    assert!(after_state <= after_region);

    session.set_cities(strings(&["Los Angeles"]));
    assert!(session.view().len() <= after_state);
}

#[test]
fn test_clear_selection_restores_base_view() {
    let mut session = sample_session();
    session.set_regions(strings(&["Central"]));
    assert_eq!(session.view().len(), 2);

    session.clear_selection();
    assert_eq!(*session.view(), session.base_view());
}

// ============================================================================
// CASCADING OPTION DOMAINS
// ============================================================================

#[test]
fn test_region_options_come_from_date_filtered_view() {
    let session = sample_session();
    // First-appearance order; "South" only occurs on the undated row.
    assert_eq!(session.region_options(), strings(&["West", "East", "Central"]));
}

#[test]
fn test_state_options_follow_region_selection() {
    let mut session = sample_session();
    assert_eq!(
        session.state_options(),
        strings(&["California", "Washington", "New York", "Texas"])
    );

    session.set_regions(strings(&["West"]));
    assert_eq!(session.state_options(), strings(&["California", "Washington"]));
}

#[test]
fn test_city_options_follow_state_selection() {
    let mut session = sample_session();
    session.set_regions(strings(&["West"]));
    session.set_states(strings(&["California"]));
    assert_eq!(
        session.city_options(),
        strings(&["Los Angeles", "San Francisco"])
    );
}

#[test]
fn test_date_range_restricts_domains() {
    let mut session = sample_session();
    session.set_date_range(date(2024, 1, 1), date(2024, 2, 28));
    assert_eq!(session.region_options(), strings(&["East", "Central"]));
}

// ============================================================================
// SELECTION PRUNING
// ============================================================================

#[test]
fn test_region_change_prunes_stale_city() {
    let mut session = sample_session();
    session.set_regions(strings(&["West"]));
    session.set_states(strings(&["California"]));
    session.set_cities(strings(&["Los Angeles"]));
    assert_eq!(session.view().rows, vec![0]);

    // East also has California rows, so the state selection survives;
    // Los Angeles does not and must be dropped.
    session.set_regions(strings(&["East"]));
    assert_eq!(session.selection().states, strings(&["California"]));
    assert!(session.selection().cities.is_empty());
    assert_eq!(session.view().rows, vec![4]);
}

#[test]
fn test_region_change_prunes_stale_state() {
    let mut session = sample_session();
    session.set_regions(strings(&["West"]));
    session.set_states(strings(&["Washington"]));

    session.set_regions(strings(&["Central"]));
    assert!(session.selection().states.is_empty());
    assert_eq!(session.view().rows, vec![6, 7]);
}

#[test]
fn test_date_change_prunes_out_of_range_selection() {
    let mut session = sample_session();
    session.set_regions(strings(&["West"]));

    // No West rows in 2024.
    session.set_date_range(date(2024, 1, 1), date(2024, 2, 28));
    assert!(session.selection().regions.is_empty());
    assert_eq!(session.view().rows, vec![5, 6, 7]);
}
