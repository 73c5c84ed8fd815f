// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

/// Absolute difference `|a - b|`. Never overflows.
#[inline]
pub fn integer_distance(a: u32, b: u32) -> u32 {
    a.abs_diff(b)
}
