//! FILENAME: session/tests/common/mod.rs
//! Shared fixture for session integration tests: a small superstore-style
//! dataset spanning a year boundary, with California present in two
//! regions and one row carrying an unparseable order date.

#![allow(dead_code)]

use dataset::{parse_order_date, Dataset, Record};
use session::ExplorerSession;

/// Row layout: (date, region, state, city, category, sub-category,
/// segment, sales, profit, quantity).
pub const ROWS: [(&str, &str, &str, &str, &str, &str, &str, f64, f64, i64); 9] = [
    ("05-11-2023", "West", "California", "Los Angeles", "Furniture", "Chairs", "Consumer", 100.0, 20.0, 2),
    ("18-11-2023", "West", "California", "San Francisco", "Technology", "Phones", "Corporate", 200.0, 50.0, 1),
    ("02-12-2023", "West", "Washington", "Seattle", "Furniture", "Tables", "Consumer", 150.0, -5.0, 3),
    ("20-12-2023", "East", "New York", "Buffalo", "Office Supplies", "Paper", "Home Office", 50.0, 10.0, 5),
    ("27-12-2023", "East", "California", "Riverton", "Furniture", "Chairs", "Consumer", 75.0, 15.0, 1),
    ("09-01-2024", "East", "New York", "New York City", "Technology", "Phones", "Consumer", 300.0, 80.0, 2),
    ("15-01-2024", "Central", "Texas", "Dallas", "Office Supplies", "Binders", "Corporate", 25.0, 5.0, 4),
    ("03-02-2024", "Central", "Texas", "Austin", "Furniture", "Tables", "Consumer", 125.0, 30.0, 2),
    // Unparseable date: excluded from every date-filtered view.
    ("not-a-date", "South", "Florida", "Miami", "Technology", "Phones", "Consumer", 999.0, 1.0, 1),
];

pub fn sample_dataset() -> Dataset {
    Dataset::from_records(
        ROWS.iter()
            .map(|&(date, region, state, city, category, sub_category, segment, sales, profit, quantity)| {
                Record {
                    order_date: parse_order_date(date),
                    region: region.to_string(),
                    state: state.to_string(),
                    city: city.to_string(),
                    category: category.to_string(),
                    sub_category: sub_category.to_string(),
                    segment: segment.to_string(),
                    sales,
                    profit,
                    quantity,
                }
            })
            .collect(),
    )
}

/// A session over the sample dataset with its default (full-span) range.
pub fn sample_session() -> ExplorerSession {
    ExplorerSession::from_dataset(sample_dataset()).unwrap()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
