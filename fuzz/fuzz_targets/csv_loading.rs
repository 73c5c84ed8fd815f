// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for loading arbitrary CSV text.
//!
//! Loading must either fail with a typed error or produce records with
//! sequential ids, a non-empty cuisine name and rank zero. It must never panic.

#![no_main]

use arbitrary::Arbitrary;
use cuisinesearch::{list_restaurants, search_restaurants, CsvSource, DataSources};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct LoadInput {
    cuisines: String,
    restaurants: String,
}

fuzz_target!(|input: LoadInput| {
    let sources = DataSources {
        cuisines: CsvSource::text("cuisines.csv", input.cuisines),
        restaurants: CsvSource::text("restaurants.csv", input.restaurants),
    };

    let Ok(records) = list_restaurants(&sources) else {
        return;
    };

    for (idx, record) in records.iter().enumerate() {
        assert_eq!(record.id, idx + 1);
        assert_eq!(record.rank, 0);
        assert!(!record.cuisine_name.is_empty());
    }

    // Sources that load once also rank
    let top = search_restaurants(&sources, [("rating", "3")], 5).expect("loaded sources rank");
    assert_eq!(top.len(), records.len().min(5));
});
