// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit distance.
//!
//! Checks the metric laws on arbitrary Unicode: identity, symmetry and the
//! length bounds. Every fuzzy text term in ranking goes through this function.

#![no_main]

use arbitrary::Arbitrary;
use cuisinesearch::string_distance;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts (quadratic)
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();

    let d = string_distance(&a, &b);

    assert_eq!(d, string_distance(&b, &a), "asymmetric for {:?} / {:?}", a, b);
    assert_eq!(string_distance(&a, &a), 0);

    let la = a.chars().count();
    let lb = b.chars().count();
    assert!(d >= la.abs_diff(lb), "below length difference for {:?} / {:?}", a, b);
    assert!(d <= la.max(lb), "above longer length for {:?} / {:?}", a, b);
    assert_eq!(d == 0, a == b);
});
