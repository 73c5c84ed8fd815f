// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error kinds for loading and querying.
//!
//! Loading is all-or-nothing: any of the load errors aborts the whole load and no
//! partial record set escapes. Ranking and top-N selection never fail, so the only
//! errors after a successful load come from interpreting the caller's query.

use thiserror::Error;

/// Everything that can go wrong between a raw source and a ranked answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The tabular source could not be opened or read.
    #[error("failed to read source '{source_name}': {message}")]
    SourceRead {
        source_name: String,
        message: String,
    },

    /// A row has the wrong number of columns.
    #[error("source '{source_name}' row {row}: expected {expected} columns, found {found}")]
    Format {
        source_name: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A numeric column is not a non-negative integer.
    #[error("source '{source_name}' row {row}: column '{column}' is not a non-negative integer: '{value}'")]
    Parse {
        source_name: String,
        row: usize,
        column: &'static str,
        value: String,
    },

    /// A query parameter could not be interpreted.
    #[error("query parameter '{param}' has invalid value '{value}'")]
    CriteriaDecode { param: &'static str, value: String },

    /// None of the recognized query parameters were supplied.
    #[error("mandatory parameters missed: expected at least one of name, cuisine, distance, price, rating")]
    EmptyQuery,
}

impl Error {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::SourceRead { .. } => "source_read",
            Error::Format { .. } => "format",
            Error::Parse { .. } => "parse",
            Error::CriteriaDecode { .. } => "criteria_decode",
            Error::EmptyQuery => "empty_query",
        }
    }

    /// Did the caller cause this (bad query) rather than the data source?
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::CriteriaDecode { .. } | Error::EmptyQuery)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
