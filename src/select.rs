// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded top-N selection over an already ranked list.
//!
//! The cut is always `min(limit, len)`. Short lists (including empty ones) come back
//! whole; nothing ever reads past the end.

/// Size of the result set a search returns unless told otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Leading `min(limit, len)` elements, borrowed.
pub fn top_slice<T>(ranked: &[T], limit: usize) -> &[T] {
    &ranked[..limit.min(ranked.len())]
}

/// Leading `min(limit, len)` elements, owned. The tail is dropped.
pub fn select_top<T>(mut ranked: Vec<T>, limit: usize) -> Vec<T> {
    ranked.truncate(limit);
    ranked
}
