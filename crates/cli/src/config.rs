// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Command-Line Configuration
//!
//! [`Cli`] is the argument surface; [`ReorderConfig`] is what the driver
//! actually needs from it.
//!
//! ## Example
//!
//! ```rust
//! use clap::Parser;
//! use yaml_reorder_cli::{Cli, ReorderConfig};
//! use yaml_reorder_sql::Dialect;
//!
//! let cli = Cli::parse_from(["yaml-reorder", "models/stg_users.sql", "--dialect", "snowflake"]);
//! let config = ReorderConfig::from(&cli);
//! assert_eq!(config.dialect, Dialect::Snowflake);
//! ```

use std::path::PathBuf;

use clap::Parser;
use yaml_reorder_sql::Dialect;

/// Reorder dbt YAML columns to match SQL column order
#[derive(Debug, Parser)]
#[command(name = "yaml-reorder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path(s) to SQL or YAML file(s)
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// SQL dialect used to parse the models
    #[arg(short, long, value_enum, default_value_t = Dialect::BigQuery)]
    pub dialect: Dialect,

    /// Log skipped inputs and reconciliation details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReorderConfig {
    /// Dialect for SQL parsing
    pub dialect: Dialect,

    /// Verbose logging
    pub verbose: bool,
}

impl ReorderConfig {
    /// Create a configuration for `dialect`
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Default::default()
        }
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

impl From<&Cli> for ReorderConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            dialect: cli.dialect,
            verbose: cli.verbose,
        }
    }
}
