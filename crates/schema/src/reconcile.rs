// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Column Order Reconciliation
//!
//! Brings the first model's column list into the order the SQL selects
//! columns in.
//!
//! ## Policy
//!
//! - The SQL is the source of truth for order.
//! - Columns only the SQL has are never added to the document.
//! - Columns only the document has are **dropped** from the list.
//! - Each kept entry moves with all of its properties.
//! - Duplicate names in the document: the last entry wins.
//! - Duplicate names in the SQL: the entry is repeated.
//!
//! Order comparison is exact sequence equality, so a run that changes
//! nothing performs no write.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::document::{ColumnEntry, Document};
use crate::error::SchemaResult;

/// Result of reconciling one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// The column list already matched the SQL order
    Unchanged,

    /// The column list was rewritten
    Reordered {
        /// Number of entries in the new list
        columns: usize,
        /// Document columns the SQL does not select, now removed
        dropped: Vec<String>,
    },
}

impl Reconciliation {
    /// Whether the document was modified
    pub fn is_changed(&self) -> bool {
        matches!(self, Reconciliation::Reordered { .. })
    }
}

/// Reorder `doc`'s first model columns to follow `sql_columns`.
///
/// The document is only mutated when the order differs.
pub fn reconcile(doc: &mut Document, sql_columns: &[String]) -> SchemaResult<Reconciliation> {
    let columns = doc.columns()?;

    let current_order: Vec<&str> = columns.iter().map(ColumnEntry::name).collect();

    // Later duplicates overwrite earlier ones
    let lookup: HashMap<&str, usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| (column.name(), index))
        .collect();

    let new_order: Vec<usize> = sql_columns
        .iter()
        .filter_map(|name| lookup.get(name.as_str()).copied())
        .collect();
    let new_names: Vec<&str> = new_order.iter().map(|&index| columns[index].name()).collect();

    if new_names == current_order {
        debug!("Columns of {} already in SQL order", doc.path().display());
        return Ok(Reconciliation::Unchanged);
    }

    let dropped: Vec<String> = current_order
        .iter()
        .filter(|name| !new_names.contains(*name))
        .map(|name| name.to_string())
        .collect();

    doc.reorder_columns(&new_order)?;

    if !dropped.is_empty() {
        info!(
            "Dropped {} column(s) not selected by the SQL from {}: {}",
            dropped.len(),
            doc.path().display(),
            dropped.join(", ")
        );
    }

    Ok(Reconciliation::Reordered {
        columns: new_order.len(),
        dropped,
    })
}

/// Read the schema at `path`, reconcile it, and write it back if changed
pub fn reorder_file(path: impl AsRef<Path>, sql_columns: &[String]) -> SchemaResult<Reconciliation> {
    let mut doc = Document::read(path)?;
    let outcome = reconcile(&mut doc, sql_columns)?;

    if outcome.is_changed() {
        doc.write()?;
    }

    Ok(outcome)
}
