// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where raw rows come from.
//!
//! The loader only needs "give me every row of the named source". `RowSource` is that
//! seam; `CsvSource` is the implementation used in practice, reading either a file on
//! disk or CSV text already in memory (handy for tests and embedding).
//!
//! Rows are returned exactly as read, header included. Column-count validation is the
//! loader's job so it can report the offending row number itself.

use std::io;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// A named supplier of raw tabular rows.
pub trait RowSource {
    /// Human-readable name used in errors and logs.
    fn label(&self) -> &str;

    /// Read every row, header included. Fails with [`Error::SourceRead`].
    fn read_rows(&self) -> Result<Vec<Vec<String>>>;
}

#[derive(Debug, Clone)]
enum Origin {
    File(PathBuf),
    Text(String),
}

/// Comma-separated rows from a file or an in-memory string.
#[derive(Debug, Clone)]
pub struct CsvSource {
    label: String,
    origin: Origin,
}

impl CsvSource {
    /// Read from a file. The label is the path as given.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            label: path.display().to_string(),
            origin: Origin::File(path),
        }
    }

    /// Read from CSV text held in memory.
    pub fn text(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            origin: Origin::Text(text.into()),
        }
    }

    fn source_read(&self, err: impl std::fmt::Display) -> Error {
        Error::SourceRead {
            source_name: self.label.clone(),
            message: err.to_string(),
        }
    }

    fn collect<R: io::Read>(&self, mut reader: csv::Reader<R>) -> Result<Vec<Vec<String>>> {
        reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect())
                    .map_err(|e| self.source_read(e))
            })
            .collect()
    }
}

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Headerless so the header row is validated like any other, and flexible so a
    // short or long row reaches the loader instead of failing inside the reader.
    builder.has_headers(false).flexible(true);
    builder
}

impl RowSource for CsvSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        match &self.origin {
            Origin::File(path) => {
                let reader = builder().from_path(path).map_err(|e| self.source_read(e))?;
                self.collect(reader)
            }
            Origin::Text(text) => self.collect(builder().from_reader(text.as_bytes())),
        }
    }
}
