// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for yaml-reorder
//!
//! This crate provides common testing components including:
//! - Sample model SQL and schema YAML fixtures
//! - Temporary model directories holding SQL/YAML pairs
//! - Schema-specific assertions

pub mod assertions;
pub mod fixtures;
pub mod model_dir;

// Re-exports for convenience
pub use assertions::SchemaAssertions;
pub use fixtures::{SqlFixtures, YamlFixtures};
pub use model_dir::ModelDir;
