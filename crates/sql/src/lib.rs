// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # yaml-reorder - SQL Layer
//!
//! This crate turns a dbt model's SQL source into the ordered list of
//! columns its final SELECT produces.
//!
//! ## Pipeline
//!
//! ```text
//! raw model SQL ──→ clean_sql ──→ extract_columns(dialect) ──→ ["id", "email", ...]
//! ```
//!
//! - [`clean_sql`]: strips Jinja templating and comments (pure text transform)
//! - [`extract_columns`]: parses the cleaned text with `sqlparser` under a
//!   [`Dialect`] and names each select item
//!
//! ## Usage
//!
//! ```rust
//! use yaml_reorder_sql::{Dialect, clean_sql, extract_columns};
//!
//! let sql = "{{ config(materialized='view') }}\nselect id, email from {{ ref('users') }}";
//! let columns = extract_columns(&clean_sql(sql), Dialect::BigQuery).unwrap();
//! assert_eq!(columns, vec!["id", "email"]);
//! ```

pub mod clean;
pub mod dialect;
pub mod error;
pub mod extract;

// Re-export commonly used types
pub use clean::{MACRO_PLACEHOLDER, TABLE_PLACEHOLDER, clean_sql};
pub use dialect::Dialect;
pub use error::{SqlError, SqlResult};
pub use extract::extract_columns;

/// Clean `sql` and extract its SELECT-list column names in one step
pub fn columns_from_model_sql(sql: &str, dialect: Dialect) -> SqlResult<Vec<String>> {
    let cleaned = clean_sql(sql);
    tracing::debug!("Cleaned model SQL: {} -> {} bytes", sql.len(), cleaned.len());
    extract_columns(&cleaned, dialect)
}
