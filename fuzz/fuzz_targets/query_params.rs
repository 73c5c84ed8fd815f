// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for turning raw query parameters into criteria.

#![no_main]

use arbitrary::Arbitrary;
use cuisinesearch::{build_criteria, Error};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    params: Vec<(String, String)>,
}

fuzz_target!(|input: QueryInput| {
    let params = input.params.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    match build_criteria(params) {
        Ok(criteria) => {
            // Zero never survives as a requested value
            assert_ne!(criteria.rating, Some(0));
            assert_ne!(criteria.distance, Some(0));
            assert_ne!(criteria.price, Some(0));
        }
        Err(err) => assert!(matches!(err, Error::CriteriaDecode { .. })),
    }
});
