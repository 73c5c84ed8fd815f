//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cuisinesearch::{CsvSource, DataSources, RestaurantRecord, SearchCriteria};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

// Re-export canonical test utilities from cuisinesearch::testing
pub use cuisinesearch::testing::{make_record, memory_sources};

// ============================================================================
// SAMPLE DATASET
// ============================================================================

pub const SAMPLE_CUISINES: &str = "\
id,name
1,American
2,Chinese
3,Thai
4,Italian
5,Mexican
";

/// Eight restaurants. The last name carries a contamination suffix that loading
/// must strip.
pub const SAMPLE_RESTAURANTS: &str = "\
name,customer_rating,distance,price,cuisine_id
Bella Napoli,4,2,20,4
Golden Wok,3,5,15,2
Thai Orchid,5,3,25,3
Burger Joint,2,1,10,1
Pasta Bella,5,8,30,4
Taco Loco,4,4,12,5
Wok This Way,4,2,18,2
Noodle HouseClick to check domain availability.,3,6,14,2
";

/// CSV files on disk. The directory lives as long as the fixture.
pub struct CsvFixture {
    pub dir: TempDir,
    pub sources: DataSources<CsvSource>,
}

pub fn write_fixture(cuisines_csv: &str, restaurants_csv: &str) -> CsvFixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cuisines = dir.path().join("cuisines.csv");
    let restaurants = dir.path().join("restaurants.csv");
    fs::write(&cuisines, cuisines_csv).expect("write cuisines");
    fs::write(&restaurants, restaurants_csv).expect("write restaurants");
    CsvFixture {
        sources: DataSources {
            cuisines: CsvSource::file(cuisines),
            restaurants: CsvSource::file(restaurants),
        },
        dir,
    }
}

pub fn sample_fixture() -> CsvFixture {
    write_fixture(SAMPLE_CUISINES, SAMPLE_RESTAURANTS)
}

pub fn ids(records: &[RestaurantRecord]) -> Vec<usize> {
    records.iter().map(|r| r.id).collect()
}

pub fn ranks(records: &[RestaurantRecord]) -> Vec<i64> {
    records.iter().map(|r| r.rank).collect()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short names, ASCII plus a handful of multi-byte words.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::string::string_regex("[A-Za-z ]{0,12}").unwrap(),
        1 => prop::sample::select(vec![
            "Café Noir".to_string(),
            "Smørrebrød".to_string(),
            "Jalapeño Hut".to_string(),
            "東京ラーメン".to_string(),
            "Pizza Place".to_string(),
        ]),
    ]
}

pub fn cuisine_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Italian".to_string(),
        "Chinese".to_string(),
        "Thai".to_string(),
        "unknown".to_string(),
    ])
}

/// Records as a load would produce them: ids 1..=n in order, rank zero.
pub fn records_strategy(max: usize) -> impl Strategy<Value = Vec<RestaurantRecord>> {
    prop::collection::vec(
        (name_strategy(), 0u32..6, 0u32..20, 0u32..60, cuisine_strategy()),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (name, rating, distance, price, cuisine))| {
                make_record(idx + 1, &name, rating, distance, price, &cuisine)
            })
            .collect()
    })
}

/// Arbitrary criteria, each field independently present or absent.
pub fn criteria_strategy() -> impl Strategy<Value = SearchCriteria> {
    (
        prop::option::of(name_strategy()),
        prop::option::of(cuisine_strategy()),
        prop::option::of(1u32..6),
        prop::option::of(1u32..20),
        prop::option::of(1u32..60),
    )
        .prop_map(|(name, cuisine_name, rating, distance, price)| SearchCriteria {
            name,
            cuisine_name,
            rating,
            distance,
            price,
        })
}
