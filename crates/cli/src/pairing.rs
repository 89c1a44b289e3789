// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Model SQL / schema YAML pairing
//!
//! A dbt model `models/stg_users.sql` is described by the sibling
//! `models/stg_users.yml` (or `.yaml`). Either file may be passed on the
//! command line; the other is found by swapping the extension.

use std::path::{Path, PathBuf};

const SQL_EXTENSION: &str = "sql";
const SCHEMA_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// The files involved in one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPair {
    /// Path of the model SQL (may not exist)
    pub sql: PathBuf,

    /// Path of the schema document, `None` if no candidate exists
    pub yaml: Option<PathBuf>,
}

/// Whether `path` names a schema document
pub fn is_schema_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCHEMA_EXTENSIONS.contains(&ext))
}

/// Derive the SQL/schema pair for a command-line input.
///
/// - `.yml` / `.yaml` input: the input is the schema, the SQL is its `.sql`
///   sibling.
/// - anything else: the input is the SQL, the schema is the first existing of
///   its `.yml` and `.yaml` siblings.
pub fn resolve(input: &Path) -> ModelPair {
    if is_schema_path(input) {
        return ModelPair {
            sql: input.with_extension(SQL_EXTENSION),
            yaml: Some(input.to_path_buf()).filter(|path| path.exists()),
        };
    }

    let yaml = SCHEMA_EXTENSIONS
        .iter()
        .map(|ext| input.with_extension(ext))
        .find(|candidate| candidate.exists());

    ModelPair {
        sql: input.to_path_buf(),
        yaml,
    }
}
