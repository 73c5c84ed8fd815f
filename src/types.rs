// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a search works on.
//!
//! Everything here is a value snapshot created by a single load and thrown away once
//! the answer is produced. Nothing is shared across searches.
//!
//! # Invariants
//!
//! - **RestaurantRecord.id**: 1-based and sequential in source row order within one load.
//!   Ids are re-issued on every load, so they carry no identity across searches.
//!
//! - **RestaurantRecord.cuisine_name**: never empty. Unknown cuisine ids resolve to
//!   [`UNKNOWN_CUISINE`](crate::cuisine::UNKNOWN_CUISINE).
//!
//! - **RestaurantRecord.rank**: zero until a ranking pass sets it. Always fully
//!   recomputed; there is no incremental update.

use serde::{Deserialize, Serialize};

/// One restaurant row, typed and resolved.
///
/// Serialized field names follow the wire format consumers already know:
/// `cuisine_id` for the id and `cuisine` for the resolved display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub id: usize,
    pub name: String,
    pub rating: u32,
    pub distance: u32,
    pub price: u32,
    pub cuisine_id: u32,
    #[serde(rename = "cuisine")]
    pub cuisine_name: String,
    /// Accumulated match score. Lower is better. May be negative because the
    /// distance and price terms can subtract.
    pub rank: i64,
}

/// What the caller asked for. Every field is optional.
///
/// Zero numeric values never appear here: the query builder normalises them to
/// `None`, since "rating 0" cannot be told apart from "rating not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub cuisine_name: Option<String>,
    pub rating: Option<u32>,
    pub distance: Option<u32>,
    pub price: Option<u32>,
}

impl SearchCriteria {
    /// True when no usable field was supplied. Callers reject such queries
    /// before ranking.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.cuisine_name.is_none()
            && self.rating.is_none()
            && self.distance.is_none()
            && self.price.is_none()
    }
}
