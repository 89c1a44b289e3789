// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for the driver
//!
//! Every stage error for a single input is funnelled into [`DriverError`],
//! which the driver reports and then moves on from.

use std::path::PathBuf;

use thiserror::Error;
use yaml_reorder_schema::SchemaError;
use yaml_reorder_sql::SqlError;

/// Result type alias for driver operations
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors that can occur while processing one input
#[derive(Debug, Error)]
pub enum DriverError {
    /// The model SQL exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ReadSql {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model SQL could not be turned into columns
    #[error(transparent)]
    Sql(#[from] SqlError),

    /// The schema document could not be reconciled or written
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
