// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-field terms of the rank formula.
//!
//! ```text
//! rank = name_term + cuisine_term + rating_term + distance_term + price_term
//! ```
//!
//! | Term     | Criteria absent | Requested `w` vs record `r`                          |
//! |----------|-----------------|------------------------------------------------------|
//! | name     | +1              | +edit(w, r)                                          |
//! | cuisine  | +1              | +edit(w, r)                                          |
//! | rating   | 0               | `w < r`: +\|w - r\|, else +1                         |
//! | distance | 0               | `w < r`: +\|w - r\|, else −\|w - r\|                 |
//! | price    | 0               | `w <= r`: +\|w - r\|, else −1                        |
//!
//! Only the two text terms charge for being absent. The distance and price terms are
//! asymmetric on purpose and can drive the rank below zero: a restaurant closer than
//! requested earns its whole margin back, a cheaper one earns a flat point.

use crate::distance::{integer_distance, string_distance};
use crate::types::{RestaurantRecord, SearchCriteria};

/// Added by a text term when the caller did not ask about that field.
pub const ABSENT_TEXT_PENALTY: i64 = 1;

/// Added by the rating term when the record is not rated above the request.
pub const RATING_NOT_ABOVE_PENALTY: i64 = 1;

/// Subtracted by the price term when the record is cheaper than requested.
pub const CHEAPER_PRICE_BONUS: i64 = 1;

fn requested(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}

/// Name or cuisine term: edit distance to the wanted text, or a flat penalty.
pub fn text_term(wanted: Option<&str>, actual: &str) -> i64 {
    match wanted {
        Some(w) => string_distance(w, actual) as i64,
        None => ABSENT_TEXT_PENALTY,
    }
}

pub fn rating_term(wanted: Option<u32>, actual: u32) -> i64 {
    match requested(wanted) {
        None => 0,
        Some(w) if w < actual => i64::from(integer_distance(w, actual)),
        Some(_) => RATING_NOT_ABOVE_PENALTY,
    }
}

pub fn distance_term(wanted: Option<u32>, actual: u32) -> i64 {
    match requested(wanted) {
        None => 0,
        Some(w) if w < actual => i64::from(integer_distance(w, actual)),
        Some(w) => -i64::from(integer_distance(w, actual)),
    }
}

pub fn price_term(wanted: Option<u32>, actual: u32) -> i64 {
    match requested(wanted) {
        None => 0,
        Some(w) if w <= actual => i64::from(integer_distance(w, actual)),
        Some(_) => -CHEAPER_PRICE_BONUS,
    }
}

/// Full rank of one record against `criteria`. Lower is a better match.
pub fn score_record(criteria: &SearchCriteria, record: &RestaurantRecord) -> i64 {
    text_term(criteria.name.as_deref(), &record.name)
        + text_term(criteria.cuisine_name.as_deref(), &record.cuisine_name)
        + rating_term(criteria.rating, record.rating)
        + distance_term(criteria.distance, record.distance)
        + price_term(criteria.price, record.price)
}
