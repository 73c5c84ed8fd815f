// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how a restaurant gets its number.
//!
//! Every candidate gets an integer rank summed from five independent terms, one per
//! criteria field. Lower is better. Records are then stably sorted by rank, so equal
//! ranks keep their load order and identical input always gives identical output.

mod terms;
pub mod ranking;

pub use terms::*;
pub use ranking::{compare_by_rank, rank};
