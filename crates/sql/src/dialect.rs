// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Support
//!
//! This module defines the SQL dialects accepted by the column extractor.
//!
//! ## Design
//!
//! Each dialect is a closed enum variant that maps onto one `sqlparser`
//! grammar. The set mirrors the warehouses dbt projects usually target:
//!
//! - **BigQuery** (default): backtick identifiers, `STRUCT`/`ARRAY` literals
//! - **Snowflake**: `QUALIFY`, `:` path access on variants
//! - **Postgres**: `::` casts, dollar-quoted strings
//! - **Redshift**: Postgres-derived with its own identifier rules
//! - **Databricks**: Spark SQL, backtick identifiers
//! - **DuckDB**: Postgres-like with `EXCLUDE`/`REPLACE` on star expressions
//!
//! The lowercase identifiers (`bigquery`, `snowflake`, ...) are the names used
//! on the command line and in [`Dialect::from_str`].

use std::fmt;
use std::str::FromStr;

use sqlparser::dialect::{
    BigQueryDialect, DatabricksDialect, DuckDbDialect, PostgreSqlDialect, RedshiftSqlDialect,
    SnowflakeDialect,
};

use crate::error::SqlError;

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Dialect {
    /// Google BigQuery
    #[default]
    #[cfg_attr(feature = "clap", value(name = "bigquery"))]
    BigQuery,
    /// Snowflake
    #[cfg_attr(feature = "clap", value(name = "snowflake"))]
    Snowflake,
    /// PostgreSQL
    #[cfg_attr(feature = "clap", value(name = "postgres"))]
    Postgres,
    /// Amazon Redshift
    #[cfg_attr(feature = "clap", value(name = "redshift"))]
    Redshift,
    /// Databricks / Spark SQL
    #[cfg_attr(feature = "clap", value(name = "databricks"))]
    Databricks,
    /// DuckDB
    #[cfg_attr(feature = "clap", value(name = "duckdb"))]
    DuckDb,
}

impl Dialect {
    /// Every supported dialect, in the order they are listed in help output
    pub const ALL: [Dialect; 6] = [
        Dialect::BigQuery,
        Dialect::Snowflake,
        Dialect::Postgres,
        Dialect::Redshift,
        Dialect::Databricks,
        Dialect::DuckDb,
    ];

    /// The identifier used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Dialect::BigQuery => "bigquery",
            Dialect::Snowflake => "snowflake",
            Dialect::Postgres => "postgres",
            Dialect::Redshift => "redshift",
            Dialect::Databricks => "databricks",
            Dialect::DuckDb => "duckdb",
        }
    }

    /// Returns the `sqlparser` grammar for this dialect
    pub fn parser_dialect(self) -> Box<dyn sqlparser::dialect::Dialect> {
        match self {
            Dialect::BigQuery => Box::new(BigQueryDialect {}),
            Dialect::Snowflake => Box::new(SnowflakeDialect {}),
            Dialect::Postgres => Box::new(PostgreSqlDialect {}),
            Dialect::Redshift => Box::new(RedshiftSqlDialect {}),
            Dialect::Databricks => Box::new(DatabricksDialect {}),
            Dialect::DuckDb => Box::new(DuckDbDialect {}),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.name() == wanted)
            .ok_or_else(|| SqlError::UnknownDialect(s.to_string()))
    }
}
