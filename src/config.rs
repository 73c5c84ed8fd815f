// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the data lives and how many results to return.

use std::path::PathBuf;

use crate::search::DataSources;
use crate::select::DEFAULT_RESULT_LIMIT;
use crate::source::CsvSource;

/// Default location of the cuisine table, relative to the working directory.
pub const DEFAULT_CUISINES_PATH: &str = "files/cuisines.csv";

/// Default location of the restaurant table, relative to the working directory.
pub const DEFAULT_RESTAURANTS_PATH: &str = "files/restaurants.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub cuisines_path: PathBuf,
    pub restaurants_path: PathBuf,
    /// Maximum number of records a search returns.
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cuisines_path: PathBuf::from(DEFAULT_CUISINES_PATH),
            restaurants_path: PathBuf::from(DEFAULT_RESTAURANTS_PATH),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl SearchConfig {
    /// CSV sources for the configured paths. Nothing is read until a search runs.
    pub fn sources(&self) -> DataSources<CsvSource> {
        DataSources {
            cuisines: CsvSource::file(&self.cuisines_path),
            restaurants: CsvSource::file(&self.restaurants_path),
        }
    }
}
