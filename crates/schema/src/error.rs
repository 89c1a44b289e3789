// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for schema documents
//!
//! This module defines the errors raised while reading, reconciling and
//! writing schema YAML files.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while handling a schema document
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file does not exist
    #[error("Schema file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The schema file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not well-formed YAML, or its root is not a mapping
    #[error("Invalid YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document does not have the `models[0].columns` shape
    #[error("{reason} in {}", path.display())]
    Structural { path: PathBuf, reason: String },

    /// The reordered tree could not be serialized
    #[error("Failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Writing the reconciled document failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    pub(crate) fn structural(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SchemaError::Structural {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
