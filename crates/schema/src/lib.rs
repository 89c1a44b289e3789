// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # yaml-reorder - Schema Layer
//!
//! This crate reads dbt schema YAML files, reorders the first model's
//! `columns` list, and writes the document back.
//!
//! ## Overview
//!
//! - [`Document`]: the source text plus its parsed tree, with a typed view
//!   of the first model's columns ([`ColumnEntry`])
//! - [`reconcile`]: reorders the column list in memory
//! - [`reorder_file`]: read, reconcile, and write only when something changed
//!
//! Reordering moves the column items within the original text, so comments,
//! quoting and the rest of the file are written back as they were.
//!
//! ## Usage
//!
//! ```rust
//! use yaml_reorder_schema::{Document, reconcile};
//!
//! let text = "models:\n- name: users\n  columns:\n  # contact\n  - name: email\n    description: 'Email'\n  - name: id\n";
//! let mut doc = Document::parse(text, "users.yml").unwrap();
//!
//! let sql_columns = vec!["id".to_string(), "email".to_string()];
//! let outcome = reconcile(&mut doc, &sql_columns).unwrap();
//!
//! assert!(outcome.is_changed());
//! assert_eq!(
//!     doc.text(),
//!     "models:\n- name: users\n  columns:\n  - name: id\n  # contact\n  - name: email\n    description: 'Email'\n"
//! );
//! ```

pub mod document;
pub mod error;
mod layout;
pub mod reconcile;

// Re-export commonly used types
pub use document::{ColumnEntry, Document};
pub use error::{SchemaError, SchemaResult};
pub use reconcile::{Reconciliation, reconcile, reorder_file};
