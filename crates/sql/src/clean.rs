// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Template and Comment Stripping
//!
//! dbt models are Jinja templates, not SQL. Before a generic SQL parser can
//! read them, templating and comments are removed textually. Nothing here
//! evaluates Jinja: references collapse onto one placeholder table and every
//! other expression onto one placeholder token.
//!
//! ## Pipeline
//!
//! The steps run in a fixed order:
//!
//! ```text
//! {{ ref(..) }} / {{ source(..) }}  →  dummy_table
//! {{ .. }}                          →  dummy_macro
//! {% .. %}, {# .. #}                →  removed
//! -- ..  (to end of line)           →  removed
//! /* .. */                          →  removed
//! preamble before WITH / SELECT     →  removed
//! ```
//!
//! Templating is replaced before comments are stripped, and the preamble trim
//! runs last so it never cuts into text produced by an earlier step.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Placeholder substituted for `ref()` and `source()` calls
pub const TABLE_PLACEHOLDER: &str = "dummy_table";

/// Placeholder substituted for any other `{{ .. }}` expression
pub const MACRO_PLACEHOLDER: &str = "dummy_macro";

/// One textual substitution in the cleaning pipeline
struct Step {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Step {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            // Patterns are literals in this file; an invalid one is a programming error
            pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("invalid {name} pattern: {e}")),
            replacement,
        }
    }
}

static STEPS: LazyLock<Vec<Step>> = LazyLock::new(|| {
    vec![
        Step::new("ref", r"\{\{\s*ref\([^)]*\)\s*\}\}", TABLE_PLACEHOLDER),
        Step::new("source", r"\{\{\s*source\([^)]*\)\s*\}\}", TABLE_PLACEHOLDER),
        Step::new("expression", r"\{\{[^}]*\}\}", MACRO_PLACEHOLDER),
        Step::new("statement", r"\{%[\s\S]*?%\}", ""),
        Step::new("template comment", r"\{#[\s\S]*?#\}", ""),
        Step::new("line comment", r"(?m)--.*$", ""),
        Step::new("block comment", r"/\*[\s\S]*?\*/", ""),
    ]
});

static QUERY_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:with|select)\b").unwrap_or_else(|e| panic!("invalid query start pattern: {e}"))
});

/// Remove dbt/Jinja templating and SQL comments from a model's source.
///
/// If no `WITH` or `SELECT` keyword remains after substitution, the text is
/// returned without trimming and the parser reports the problem.
pub fn clean_sql(sql: &str) -> String {
    let mut cleaned = sql.to_string();

    for step in STEPS.iter() {
        let replaced = step.pattern.replace_all(&cleaned, step.replacement);
        if let std::borrow::Cow::Owned(text) = replaced {
            trace!("clean step '{}' rewrote the query", step.name);
            cleaned = text;
        }
    }

    trim_preamble(&cleaned).to_string()
}

/// Drop everything before the first `WITH` or `SELECT` keyword
fn trim_preamble(sql: &str) -> &str {
    match QUERY_START.find(sql) {
        Some(m) => &sql[m.start()..],
        None => sql,
    }
}
