// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cuisine id → display name.
//!
//! Two phases. `CuisineTableBuilder` is filled during a load, possibly from several
//! threads at once, behind a mutex. `build()` consumes it and hands back a plain
//! `CuisineTable` that is immutable, so readers never lock.
//!
//! There is no global table. Each load builds its own and passes it by reference to
//! whoever needs to resolve names.

use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Name returned for ids the table does not know (or knows only as an empty name).
pub const UNKNOWN_CUISINE: &str = "unknown";

/// Mutex-guarded accumulator used while a cuisine source is being loaded.
///
/// Entries remember the source row they came from. When the same id appears twice,
/// the later row wins regardless of which thread inserted first, so parallel and
/// sequential loads agree.
#[derive(Debug, Default)]
pub struct CuisineTableBuilder {
    entries: Mutex<HashMap<u32, (usize, String)>>,
}

impl CuisineTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` for `id`, read from source row `row`.
    pub fn insert(&self, row: usize, id: u32, name: String) {
        let mut entries = self.entries.lock();
        match entries.entry(id) {
            Entry::Occupied(mut slot) => {
                if slot.get().0 < row {
                    slot.insert((row, name));
                }
            }
            Entry::Vacant(slot) => {
                slot.insert((row, name));
            }
        }
    }

    /// Finish population. The returned table is read-only.
    pub fn build(self) -> CuisineTable {
        let names = self
            .entries
            .into_inner()
            .into_iter()
            .map(|(id, (_, name))| (id, name))
            .collect();
        CuisineTable { names }
    }
}

/// Immutable cuisine lookup produced by one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuisineTable {
    names: HashMap<u32, String>,
}

impl CuisineTable {
    /// Display name for `id`, or [`UNKNOWN_CUISINE`].
    pub fn resolve(&self, id: u32) -> &str {
        match self.names.get(&id) {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_CUISINE,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(u32, String)> for CuisineTable {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
