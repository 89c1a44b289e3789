// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Column Order Extraction
//!
//! Parses cleaned model SQL and returns the output column names of the
//! top-level SELECT list, in order.
//!
//! Only the final SELECT is consulted. CTE bodies and sub-selects are not
//! inspected. A top-level set operation (`UNION`, ...) or a statement that is
//! not a query yields no columns.
//!
//! ## Naming
//!
//! | select item           | name               |
//! |-----------------------|--------------------|
//! | `expr AS alias`       | `alias`            |
//! | `col`                 | `col`              |
//! | `t.col`               | `col`              |
//! | `CAST(col AS INT)`    | `col`              |
//! | `*` / `t.*`           | `*` / `t.*`        |
//! | anything else         | rendered SQL text  |

use sqlparser::ast::{Expr, Query, SelectItem, SetExpr, Statement};
use sqlparser::parser::Parser;
use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};

/// Extract the SELECT-list column names of `sql` in order.
///
/// An empty result is not an error; callers decide what "no columns" means.
pub fn extract_columns(sql: &str, dialect: Dialect) -> SqlResult<Vec<String>> {
    let parser_dialect = dialect.parser_dialect();
    let statements =
        Parser::parse_sql(parser_dialect.as_ref(), sql).map_err(|e| SqlError::Parse {
            dialect,
            message: e.to_string(),
        })?;

    let statement = statements.into_iter().next().ok_or_else(|| SqlError::Parse {
        dialect,
        message: "no SQL statement found".to_string(),
    })?;

    let Statement::Query(query) = statement else {
        debug!("First statement is not a query; no columns");
        return Ok(Vec::new());
    };

    let columns: Vec<String> = projection(&query)
        .map(|items| items.iter().map(select_item_name).collect())
        .unwrap_or_default();

    debug!("Extracted {} columns with {}", columns.len(), dialect);
    Ok(columns)
}

/// The direct SELECT list of the top-level query, unwrapping parentheses
fn projection(query: &Query) -> Option<&[SelectItem]> {
    match query.body.as_ref() {
        SetExpr::Select(select) => Some(&select.projection),
        SetExpr::Query(inner) => projection(inner),
        _ => None,
    }
}

fn select_item_name(item: &SelectItem) -> String {
    match item {
        SelectItem::ExprWithAlias { alias, .. } => alias.value.clone(),
        SelectItem::UnnamedExpr(expr) => expr_name(expr),
        SelectItem::Wildcard(_) => "*".to_string(),
        SelectItem::QualifiedWildcard(..) => item.to_string(),
    }
}

/// Inferred output name of an unaliased expression
fn expr_name(expr: &Expr) -> String {
    match expr {
        Expr::Identifier(ident) => ident.value.clone(),
        Expr::CompoundIdentifier(parts) => parts
            .last()
            .map(|ident| ident.value.clone())
            .unwrap_or_else(|| expr.to_string()),
        Expr::Cast { expr: inner, .. }
        | Expr::Nested(inner)
        | Expr::Collate { expr: inner, .. } => expr_name(inner),
        other => other.to_string(),
    }
}
