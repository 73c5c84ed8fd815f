// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scrubbing boilerplate that leaks into exported name columns.
//!
//! Some exports carry text pasted in by whatever tool produced them. The blocklist
//! holds the known offenders. Each entry gets one replace pass that removes all of
//! its occurrences; entries are applied in list order.

/// Substrings that never belong in a name.
pub const CONTAMINATION: &[&str] = &["Click to check domain availability."];

/// Remove every blocklisted substring from `input`.
pub fn clean_text(input: &str) -> String {
    CONTAMINATION
        .iter()
        .fold(input.to_string(), |text, junk| text.replace(junk, ""))
}
