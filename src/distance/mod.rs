// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distance primitives the ranker is built from.
//!
//! Two pure functions: edit distance for text fields and absolute difference for
//! numeric ones. Both are metrics (zero on equal inputs, symmetric, triangle
//! inequality), which is what lets the ranker add them up meaningfully.

mod levenshtein;
mod proximity;

pub use levenshtein::string_distance;
pub use proximity::integer_distance;
