// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cuisinesearch command-line interface.
//!
//! Two subcommands: `list` prints every restaurant as loaded, `search` ranks them
//! against whatever criteria flags were given and prints the best few. Criteria
//! flags are passed through as raw strings; interpreting them is the library's job,
//! so the CLI reports exactly the same decode errors any other caller would get.

pub mod display;
pub mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use cuisinesearch::config::{SearchConfig, DEFAULT_CUISINES_PATH, DEFAULT_RESTAURANTS_PATH};
use cuisinesearch::{Error, DEFAULT_RESULT_LIMIT};

#[derive(Parser, Debug)]
#[command(
    name = "cuisinesearch",
    about = "Fuzzy multi-field restaurant search over CSV data",
    version
)]
pub struct Cli {
    /// Cuisine table with columns id,name
    #[arg(long, global = true, env = "CUISINESEARCH_CUISINES", default_value = DEFAULT_CUISINES_PATH)]
    pub cuisines: PathBuf,

    /// Restaurant table with columns name,rating,distance,price,cuisine_id
    #[arg(long, global = true, env = "CUISINESEARCH_RESTAURANTS", default_value = DEFAULT_RESTAURANTS_PATH)]
    pub restaurants: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Log debug detail to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, global = true, env = "CUISINESEARCH_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every restaurant, unranked
    List,

    /// Rank restaurants against the given criteria and print the best matches
    Search(SearchArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::List => "list",
            Commands::Search(_) => "search",
        }
    }
}

/// Names of every subcommand, echoed back in error responses.
pub const AVAILABLE_COMMANDS: [&str; 2] = ["list", "search"];

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Restaurant name to match (fuzzy)
    #[arg(long)]
    pub name: Option<String>,

    /// Cuisine name to match (fuzzy)
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Minimum customer rating
    #[arg(long)]
    pub rating: Option<String>,

    /// Preferred maximum distance
    #[arg(long)]
    pub distance: Option<String>,

    /// Preferred maximum price
    #[arg(long)]
    pub price: Option<String>,

    /// How many results to return
    #[arg(short, long, env = "CUISINESEARCH_LIMIT", default_value_t = DEFAULT_RESULT_LIMIT)]
    pub limit: usize,
}

impl SearchArgs {
    /// The supplied flags as `(param, raw value)` pairs.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("cuisine", &self.cuisine),
            ("distance", &self.distance),
            ("price", &self.price),
            ("rating", &self.rating),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl Cli {
    pub fn config(&self) -> SearchConfig {
        let result_limit = match &self.command {
            Commands::Search(args) => args.limit,
            Commands::List => DEFAULT_RESULT_LIMIT,
        };
        SearchConfig {
            cuisines_path: self.cuisines.clone(),
            restaurants_path: self.restaurants.clone(),
            result_limit,
        }
    }
}

/// JSON body printed when a command fails.
#[derive(Serialize, Debug)]
pub struct ErrorEnvelope<'a> {
    pub command: &'a str,
    pub status: u16,
    pub kind: &'static str,
    pub error: String,
    pub commands: [&'static str; 2],
}

impl<'a> ErrorEnvelope<'a> {
    pub fn new(command: &'a str, err: &Error) -> Self {
        Self {
            command,
            status: if err.is_client_error() { 400 } else { 500 },
            kind: err.kind(),
            error: err.to_string(),
            commands: AVAILABLE_COMMANDS,
        }
    }
}
