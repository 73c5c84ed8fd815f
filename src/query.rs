// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning loose `key=value` query parameters into `SearchCriteria`.
//!
//! Five keys are recognized: `name`, `cuisine`, `distance`, `price`, `rating`.
//! Anything else is ignored. Empty values count as absent. When a key repeats,
//! the first occurrence decides, like a URL query string's `get`.
//!
//! Each value is first classified (integer if it parses as one, text otherwise),
//! then bound to its typed field:
//!
//! | Param      | Field          | Integer value   | Text value               |
//! |------------|----------------|-----------------|--------------------------|
//! | `name`     | `name`         | kept as text    | kept                     |
//! | `cuisine`  | `cuisine_name` | kept as text    | kept                     |
//! | `rating`   | `rating`       | kept, 0 → None  | `Error::CriteriaDecode`  |
//! | `distance` | `distance`     | kept, 0 → None  | `Error::CriteriaDecode`  |
//! | `price`    | `price`        | kept, 0 → None  | `Error::CriteriaDecode`  |
//!
//! An empty result is not an error here. `SearchCriteria::is_empty` lets the caller
//! decide; the search pipeline rejects it with `Error::EmptyQuery`.

use tracing::debug;

use crate::error::{Error, Result};
use crate::loader::parse_digits;
use crate::types::SearchCriteria;

/// A recognized query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryParam {
    Name,
    Cuisine,
    Distance,
    Price,
    Rating,
}

impl QueryParam {
    pub const ALL: [QueryParam; 5] = [
        QueryParam::Name,
        QueryParam::Cuisine,
        QueryParam::Distance,
        QueryParam::Price,
        QueryParam::Rating,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QueryParam::Name => "name",
            QueryParam::Cuisine => "cuisine",
            QueryParam::Distance => "distance",
            QueryParam::Price => "price",
            QueryParam::Rating => "rating",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// A raw parameter value after the integer-first classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Integer(u32),
    Text(String),
}

impl RawValue {
    pub fn classify(raw: &str) -> Self {
        match parse_digits(raw) {
            Some(n) => RawValue::Integer(n),
            None => RawValue::Text(raw.to_string()),
        }
    }
}

fn bind_count(param: QueryParam, raw: &str) -> Result<Option<u32>> {
    match RawValue::classify(raw) {
        RawValue::Integer(0) => Ok(None),
        RawValue::Integer(n) => Ok(Some(n)),
        RawValue::Text(value) => Err(Error::CriteriaDecode {
            param: param.as_str(),
            value,
        }),
    }
}

/// Build criteria from `(key, value)` pairs.
pub fn build_criteria<I, K, V>(params: I) -> Result<SearchCriteria>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut values: [Option<String>; 5] = Default::default();
    for (key, value) in params {
        if let Some(param) = QueryParam::from_key(key.as_ref()) {
            values[param.slot()].get_or_insert_with(|| value.as_ref().to_string());
        }
    }

    let present = |param: QueryParam| values[param.slot()].as_deref().filter(|v| !v.is_empty());

    let mut criteria = SearchCriteria {
        name: present(QueryParam::Name).map(str::to_string),
        cuisine_name: present(QueryParam::Cuisine).map(str::to_string),
        ..Default::default()
    };
    if let Some(raw) = present(QueryParam::Rating) {
        criteria.rating = bind_count(QueryParam::Rating, raw)?;
    }
    if let Some(raw) = present(QueryParam::Distance) {
        criteria.distance = bind_count(QueryParam::Distance, raw)?;
    }
    if let Some(raw) = present(QueryParam::Price) {
        criteria.price = bind_count(QueryParam::Price, raw)?;
    }

    debug!(?criteria, "built search criteria");
    Ok(criteria)
}
