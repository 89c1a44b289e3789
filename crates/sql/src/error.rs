// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for SQL extraction
//!
//! This module defines the errors raised while turning model SQL into a
//! column name sequence.

use thiserror::Error;

use crate::dialect::Dialect;

/// Result type alias for SQL operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors that can occur while extracting columns from SQL
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SqlError {
    /// The cleaned text is not valid SQL for the selected dialect
    #[error("Failed to parse SQL as {dialect}: {message}")]
    Parse { dialect: Dialect, message: String },

    /// Dialect identifier outside the supported set
    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),
}
