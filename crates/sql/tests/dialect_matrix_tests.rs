// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Multi-dialect test matrix
//!
//! Tests across all supported dialects to ensure consistency.

use yaml_reorder_sql::{Dialect, columns_from_model_sql, extract_columns};
use yaml_reorder_test_utils::SqlFixtures;

#[test]
fn test_simple_select_every_dialect() {
    for dialect in Dialect::ALL {
        let columns = extract_columns(SqlFixtures::simple(), dialect)
            .unwrap_or_else(|e| panic!("Failed to parse for dialect {dialect}: {e}"));

        assert_eq!(
            columns,
            vec!["id", "email", "created_at", "name"],
            "Column mismatch for dialect {dialect}"
        );
    }
}

#[test]
fn test_templated_model_every_dialect() {
    for dialect in Dialect::ALL {
        let columns = columns_from_model_sql(SqlFixtures::templated(), dialect)
            .unwrap_or_else(|e| panic!("Failed to parse for dialect {dialect}: {e}"));

        assert_eq!(columns, vec!["id", "email", "created_at", "name"]);
    }
}

#[test]
fn test_aliases_every_dialect() {
    for dialect in Dialect::ALL {
        let columns = extract_columns("SELECT a AS x, b AS y FROM t", dialect).unwrap();
        assert_eq!(columns, vec!["x", "y"], "Alias mismatch for dialect {dialect}");
    }
}

// Dialect-specific syntax
#[test]
fn test_bigquery_backtick_identifiers() {
    let columns =
        extract_columns("SELECT `id`, `o`.total FROM orders AS `o`", Dialect::BigQuery).unwrap();
    assert_eq!(columns, vec!["id", "total"]);
}

#[test]
fn test_postgres_double_colon_cast() {
    let columns = extract_columns("SELECT amount::numeric, id FROM t", Dialect::Postgres).unwrap();
    assert_eq!(columns, vec!["amount", "id"]);
}

#[test]
fn test_snowflake_quoted_identifiers() {
    let columns =
        extract_columns("SELECT \"Id\", \"Email\" AS email FROM t", Dialect::Snowflake).unwrap();
    assert_eq!(columns, vec!["Id", "email"]);
}

#[test]
fn test_unknown_dialect_name() {
    assert!("oracle".parse::<Dialect>().is_err());
}
