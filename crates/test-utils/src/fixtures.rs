// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures: sample dbt model SQL and schema YAML

/// Sample model SQL
pub struct SqlFixtures;

impl SqlFixtures {
    // ===== Plain SELECT =====

    /// Four plain columns: `id, email, created_at, name`
    pub const fn simple() -> &'static str {
        "SELECT id, email, created_at, name FROM t"
    }

    /// `id, email`, already in the order of [`YamlFixtures::ordered`]
    pub const fn ordered() -> &'static str {
        "select id, email from users"
    }

    // ===== Templated models =====

    /// A dbt model with a config block, a ref, and both comment styles
    pub const fn templated() -> &'static str {
        "{{ config(materialized='table') }}

-- staging model for users
/* generated
   by hand */
with base as (
    select * from {{ ref('raw_users') }}
)

select
    user_id as id,          -- surrogate key
    lower(email) as email,
    {# legacy column #}
    created_at,
    full_name as name
from base
{% if is_incremental() %}
where created_at > (select max(created_at) from {{ this }})
{% endif %}
"
    }

    /// A ref, a line comment, and a block comment before `SELECT a, b`
    pub const fn commented() -> &'static str {
        "-- pulls from {{ ref('x') }}\n/* block */\nSELECT a, b FROM {{ ref('x') }}"
    }

    /// Text that is not valid SQL once cleaned
    pub const fn invalid() -> &'static str {
        "SELECT id FROM t WHERE ("
    }

    /// A model whose final statement selects nothing nameable
    pub const fn union() -> &'static str {
        "SELECT id FROM a UNION ALL SELECT id FROM b"
    }
}

/// Sample schema documents
pub struct YamlFixtures;

impl YamlFixtures {
    /// Columns listed as `name, created_at, id, email`, each with a description
    pub const fn simple() -> &'static str {
        "version: 2
models:
- name: stg_users
  description: Staging users
  columns:
  - name: name
    description: Full name
  - name: created_at
    description: Signup timestamp
  - name: id
    description: Primary key
    tests:
    - unique
    - not_null
  - name: email
    description: Email address
"
    }

    /// Two columns already in `id, email` order
    pub const fn ordered() -> &'static str {
        "version: 2
models:
- name: users
  columns:
  - name: id
    description: Primary key
  - name: email
    description: Email address
"
    }

    /// Hand-maintained layout: comments, blank lines, mixed quoting, indented
    /// sequences, and model-level keys after `columns` (`b, a` order)
    pub const fn commented() -> &'static str {
        "# Maintained by the analytics team
version: 2

models:
  - name: \"orders\"   # keep quoted
    description: 'Order facts'
    columns:
      # business key
      - name: b
        description: \"Quoted text\"
        tests: [unique]
      - name: a
        description: 'single'

    tests:
      - dbt_utils.expression_is_true:
          expression: \"a > 0\"
"
    }

    /// Two models; only the first is reconciled
    pub const fn two_models() -> &'static str {
        "version: 2
models:
- name: first
  columns:
  - name: b
  - name: a
- name: second
  columns:
  - name: b
  - name: a
"
    }

    /// A document whose first model has no `columns` key
    pub const fn no_columns() -> &'static str {
        "version: 2
models:
- name: bare
  description: No columns here
"
    }

    /// A document without a `models` key
    pub const fn no_models() -> &'static str {
        "version: 2
sources:
- name: raw
"
    }

    /// Not well-formed YAML
    pub const fn malformed() -> &'static str {
        "models:\n- name: x\n  columns: [\n"
    }
}
