//! Fuzzy multi-field restaurant search over small tabular datasets.
//!
//! Every search loads a fresh snapshot from two sources (cuisines and restaurants),
//! scores each restaurant against a sparse set of criteria, and returns the best few.
//! Nothing is cached or shared between searches.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  source.rs  │────▶│  loader/     │────▶│  scoring/   │────▶│  select.rs  │
//! │ (RowSource, │     │ (load_*,     │     │ (rank,      │     │ (select_top)│
//! │  CsvSource) │     │  clean_text) │     │  terms)     │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │  cuisine.rs  │     │  distance/   │
//!                     │ (CuisineTable│     │ (levenshtein,│
//!                     │  resolve)    │     │  proximity)  │
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! `query.rs` turns raw `key=value` parameters into `SearchCriteria`; `search.rs`
//! strings the whole pipeline together.
//!
//! # Usage
//!
//! ```no_run
//! use cuisinesearch::{search_restaurants, CsvSource, DataSources};
//!
//! let sources = DataSources {
//!     cuisines: CsvSource::file("files/cuisines.csv"),
//!     restaurants: CsvSource::file("files/restaurants.csv"),
//! };
//! let top = search_restaurants(&sources, [("cuisine", "Italian"), ("price", "20")], 5)?;
//! for r in &top {
//!     println!("{} ({}) rank {}", r.name, r.cuisine_name, r.rank);
//! }
//! # Ok::<(), cuisinesearch::Error>(())
//! ```

pub mod config;
pub mod cuisine;
pub mod distance;
pub mod error;
pub mod loader;
pub mod query;
pub mod scoring;
pub mod search;
pub mod select;
pub mod source;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::SearchConfig;
pub use cuisine::{CuisineTable, CuisineTableBuilder, UNKNOWN_CUISINE};
pub use distance::{integer_distance, string_distance};
pub use error::{Error, Result};
pub use loader::{clean_text, load_cuisines, load_restaurants};
pub use query::{build_criteria, QueryParam, RawValue};
pub use scoring::{compare_by_rank, rank, score_record};
pub use search::{
    list_restaurants, load_records, search_restaurants, search_with_criteria, DataSources,
};
pub use select::{select_top, top_slice, DEFAULT_RESULT_LIMIT};
pub use source::{CsvSource, RowSource};
pub use types::{RestaurantRecord, SearchCriteria};
