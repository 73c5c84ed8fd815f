// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over Unicode scalar values.
//!
//! Classic single-row Levenshtein DP. Counting happens on `char`s, not bytes, so
//! "café" vs "cafe" is one edit and not two. No case folding, no normalization:
//! "Thai" and "thai" are one substitution apart.

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `a` into `b`.
///
/// The shorter string is used for the DP row, so memory is `O(min(|a|, |b|))`.
pub fn string_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Row over the shorter side; distance is symmetric so the swap is free
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut dp: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(lc != sc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[short.len()]
}
