// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The request pipeline: load → rank → cut.
//!
//! Every call reloads both sources from scratch. There is no cache, so two searches
//! never share record state and a changed file is picked up on the next call. That
//! reload is also the obvious place to put a cache if throughput ever matters; it
//! would sit in front of `load_records` and nothing below it would change.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::loader::{load_cuisines, load_restaurants};
use crate::query::build_criteria;
use crate::scoring::rank;
use crate::select::select_top;
use crate::source::RowSource;
use crate::types::{RestaurantRecord, SearchCriteria};

/// The pair of sources one search reads.
#[derive(Debug, Clone)]
pub struct DataSources<S> {
    pub cuisines: S,
    pub restaurants: S,
}

/// Fresh snapshot of every restaurant, cuisine names resolved, in load order.
pub fn load_records<S: RowSource>(sources: &DataSources<S>) -> Result<Vec<RestaurantRecord>> {
    let cuisines = load_cuisines(&sources.cuisines)?;
    load_restaurants(&sources.restaurants, &cuisines)
}

/// The unfiltered listing: every record, unranked and untruncated.
pub fn list_restaurants<S: RowSource>(sources: &DataSources<S>) -> Result<Vec<RestaurantRecord>> {
    let records = load_records(sources)?;
    info!(count = records.len(), "listed restaurants");
    Ok(records)
}

/// Rank a fresh snapshot against already-built criteria and keep the best `limit`.
///
/// Rejects empty criteria with [`Error::EmptyQuery`] before touching the sources.
pub fn search_with_criteria<S: RowSource>(
    sources: &DataSources<S>,
    criteria: &SearchCriteria,
    limit: usize,
) -> Result<Vec<RestaurantRecord>> {
    if criteria.is_empty() {
        warn!("rejected search without recognized parameters");
        return Err(Error::EmptyQuery);
    }

    let records = load_records(sources)?;
    let candidates = records.len();
    let top = select_top(rank(records, criteria), limit);
    debug!(candidates, returned = top.len(), limit, "search complete");
    Ok(top)
}

/// Full search from raw `(key, value)` query parameters.
pub fn search_restaurants<S, I, K, V>(
    sources: &DataSources<S>,
    params: I,
    limit: usize,
) -> Result<Vec<RestaurantRecord>>
where
    S: RowSource,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let criteria = build_criteria(params).inspect_err(|e| warn!(error = %e, "bad search parameters"))?;
    let top = search_with_criteria(sources, &criteria, limit)?;
    info!(returned = top.len(), "searched restaurants");
    Ok(top)
}
