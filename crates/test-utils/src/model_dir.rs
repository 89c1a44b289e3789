// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Temporary dbt model directories
//!
//! Provides a scratch directory with a builder-style API for laying out
//! `model.sql` / `model.yml` pairs.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding model SQL and schema files.
///
/// The directory is deleted when the value is dropped.
pub struct ModelDir {
    dir: TempDir,
}

impl ModelDir {
    /// Create a new empty model directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temporary model directory"),
        }
    }

    /// Root of the directory
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `file_name` inside the directory
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    /// Write `content` to `file_name` and return its path
    pub fn write(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.path(file_name);
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }

    /// Write `<stem>.sql` and `<stem>.yml`, returning both paths
    pub fn write_pair(&self, stem: &str, sql: &str, yaml: &str) -> (PathBuf, PathBuf) {
        let sql_path = self.write(&format!("{stem}.sql"), sql);
        let yaml_path = self.write(&format!("{stem}.yml"), yaml);
        (sql_path, yaml_path)
    }

    /// Read `file_name` back as a string
    pub fn read(&self, file_name: &str) -> String {
        fs::read_to_string(self.path(file_name)).expect("failed to read fixture file")
    }
}

impl Default for ModelDir {
    fn default() -> Self {
        Self::new()
    }
}
