// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score every candidate, then order by rank.
//!
//! The order is total and deterministic without a secondary key: the sort is stable,
//! so records with equal rank stay in the order they were loaded.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::score_record;
use crate::types::{RestaurantRecord, SearchCriteria};

/// Ascending by rank. Equal ranks compare `Equal` so a stable sort keeps input order.
pub fn compare_by_rank(a: &RestaurantRecord, b: &RestaurantRecord) -> Ordering {
    a.rank.cmp(&b.rank)
}

/// Set `rank` on every record and return them best-first.
///
/// Output length always equals input length. Ranks from any previous pass are
/// overwritten.
pub fn rank(mut records: Vec<RestaurantRecord>, criteria: &SearchCriteria) -> Vec<RestaurantRecord> {
    #[cfg(feature = "parallel")]
    records
        .par_iter_mut()
        .for_each(|record| record.rank = score_record(criteria, record));
    #[cfg(not(feature = "parallel"))]
    records
        .iter_mut()
        .for_each(|record| record.rank = score_record(criteria, record));

    records.sort_by(compare_by_rank);

    if let Some(best) = records.first() {
        debug!(candidates = records.len(), best_rank = best.rank, best_id = best.id, "ranked");
    }
    records
}
