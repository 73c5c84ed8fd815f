// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw rows in, typed records out.
//!
//! Two sources feed a search: cuisines `(id, name)` and restaurants
//! `(name, rating, distance, price, cuisine_id)`, each with a header row. Loading is
//! strict and all-or-nothing:
//!
//! 1. Every row, header included, must have exactly the expected column count,
//!    otherwise [`Error::Format`] names the first bad row.
//! 2. Every numeric cell must be a plain decimal non-negative integer, otherwise
//!    [`Error::Parse`] names the row and column.
//! 3. Restaurant ids are assigned 1, 2, 3... in source row order. That order is also
//!    the tie-break order the ranker preserves.
//!
//! With the `parallel` feature the per-row parsing runs on rayon. Ids and ordering
//! still come from row positions, so the output is identical to the sequential path.
//! When several rows are malformed, which one gets reported may differ between runs.

mod clean;

pub use clean::{clean_text, CONTAMINATION};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::cuisine::{CuisineTable, CuisineTableBuilder};
use crate::error::{Error, Result};
use crate::source::RowSource;
use crate::types::RestaurantRecord;

/// Column layout of the cuisine source.
pub const CUISINE_COLUMNS: [&str; 2] = ["id", "name"];

/// Column layout of the restaurant source.
pub const RESTAURANT_COLUMNS: [&str; 5] = ["name", "rating", "distance", "price", "cuisine_id"];

/// Parse a non-negative decimal integer cell.
///
/// Stricter than `str::parse`: signs and surrounding whitespace are rejected.
/// `row` is the 1-based row number in the source (the header is row 1).
pub fn parse_count(source_name: &str, row: usize, column: &'static str, value: &str) -> Result<u32> {
    parse_digits(value).ok_or_else(|| Error::Parse {
        source_name: source_name.to_string(),
        row,
        column,
        value: value.to_string(),
    })
}

/// Plain decimal digits that fit a `u32`, nothing else.
pub(crate) fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Read all rows and check every one has `expected` columns.
fn read_validated(source: &impl RowSource, expected: usize) -> Result<Vec<Vec<String>>> {
    let rows = source.read_rows()?;
    if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != expected) {
        return Err(Error::Format {
            source_name: source.label().to_string(),
            row: idx + 1,
            expected,
            found: row.len(),
        });
    }
    Ok(rows)
}

/// Load the cuisine table from `source`.
pub fn load_cuisines(source: &impl RowSource) -> Result<CuisineTable> {
    let rows = read_validated(source, CUISINE_COLUMNS.len())?;
    let data: &[Vec<String>] = rows.get(1..).unwrap_or_default();
    let label = source.label();
    let builder = CuisineTableBuilder::new();

    let insert = |(idx, row): (usize, &Vec<String>)| -> Result<()> {
        // idx 0 is the first data row, which is row 2 of the source
        let row_number = idx + 2;
        let id = parse_count(label, row_number, CUISINE_COLUMNS[0], &row[0])?;
        builder.insert(row_number, id, clean_text(&row[1]));
        Ok(())
    };

    #[cfg(feature = "parallel")]
    data.par_iter().enumerate().try_for_each(insert)?;
    #[cfg(not(feature = "parallel"))]
    data.iter().enumerate().try_for_each(insert)?;

    let table = builder.build();
    debug!(source = label, cuisines = table.len(), "loaded cuisine table");
    Ok(table)
}

fn parse_restaurant(
    label: &str,
    idx: usize,
    row: &[String],
    cuisines: &CuisineTable,
) -> Result<RestaurantRecord> {
    let row_number = idx + 2;
    let count = |col: usize| parse_count(label, row_number, RESTAURANT_COLUMNS[col], &row[col]);

    let cuisine_id = count(4)?;
    Ok(RestaurantRecord {
        id: idx + 1,
        name: clean_text(&row[0]),
        rating: count(1)?,
        distance: count(2)?,
        price: count(3)?,
        cuisine_id,
        cuisine_name: cuisines.resolve(cuisine_id).to_string(),
        rank: 0,
    })
}

/// Load every restaurant from `source`, resolving cuisine names through `cuisines`.
pub fn load_restaurants(
    source: &impl RowSource,
    cuisines: &CuisineTable,
) -> Result<Vec<RestaurantRecord>> {
    let rows = read_validated(source, RESTAURANT_COLUMNS.len())?;
    let data: &[Vec<String>] = rows.get(1..).unwrap_or_default();
    let label = source.label();

    #[cfg(feature = "parallel")]
    let records = data
        .par_iter()
        .enumerate()
        .map(|(idx, row)| parse_restaurant(label, idx, row, cuisines))
        .collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let records = data
        .iter()
        .enumerate()
        .map(|(idx, row)| parse_restaurant(label, idx, row, cuisines))
        .collect::<Result<Vec<_>>>()?;

    debug!(source = label, restaurants = records.len(), "loaded restaurants");
    Ok(records)
}
