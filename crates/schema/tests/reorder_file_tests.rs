// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for reading, reconciling and writing schema files

use yaml_reorder_schema::{Document, Reconciliation, SchemaError, reorder_file};
use yaml_reorder_test_utils::{ModelDir, SchemaAssertions, YamlFixtures};

fn sql_order(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_reorder_to_match_sql() {
    let dir = ModelDir::new();
    let path = dir.write("simple.yml", YamlFixtures::simple());
    SchemaAssertions::assert_column_order(&path, &["name", "created_at", "id", "email"]);

    let outcome = reorder_file(&path, &sql_order(&["id", "email", "created_at", "name"])).unwrap();

    assert!(outcome.is_changed(), "Should report a change when reordering happens");
    SchemaAssertions::assert_column_order(&path, &["id", "email", "created_at", "name"]);

    let doc = SchemaAssertions::load(&path);
    SchemaAssertions::assert_column_property(&doc, "id", "description", "Primary key");
    SchemaAssertions::assert_column_property(&doc, "name", "description", "Full name");
    SchemaAssertions::assert_column_property(&doc, "created_at", "description", "Signup timestamp");
    SchemaAssertions::assert_column_property(&doc, "email", "description", "Email address");
}

#[test]
fn test_second_run_is_unchanged_and_idempotent() {
    let dir = ModelDir::new();
    let path = dir.write("simple.yml", YamlFixtures::simple());
    let order = sql_order(&["id", "email", "created_at", "name"]);

    assert!(reorder_file(&path, &order).unwrap().is_changed());
    let after_first = dir.read("simple.yml");

    assert_eq!(reorder_file(&path, &order).unwrap(), Reconciliation::Unchanged);
    assert_eq!(dir.read("simple.yml"), after_first);
}

#[test]
fn test_every_property_survives_the_move() {
    let dir = ModelDir::new();
    let path = dir.write("simple.yml", YamlFixtures::simple());
    let before = SchemaAssertions::columns(&SchemaAssertions::load(&path), 0);

    reorder_file(&path, &sql_order(&["email", "id", "name", "created_at"])).unwrap();

    let after = SchemaAssertions::columns(&SchemaAssertions::load(&path), 0);
    assert_eq!(before.len(), after.len());
    for column in &before {
        assert!(after.contains(column), "Column entry changed: {column:?}");
    }
}

#[test]
fn test_exact_output_layout() {
    let dir = ModelDir::new();
    let path = dir.write("simple.yml", YamlFixtures::simple());

    reorder_file(&path, &sql_order(&["id", "email", "created_at", "name"])).unwrap();

    assert_eq!(
        dir.read("simple.yml"),
        "version: 2
models:
- name: stg_users
  description: Staging users
  columns:
  - name: id
    description: Primary key
    tests:
    - unique
    - not_null
  - name: email
    description: Email address
  - name: created_at
    description: Signup timestamp
  - name: name
    description: Full name
"
    );
}

#[test]
fn test_columns_missing_from_sql_are_dropped() {
    let dir = ModelDir::new();
    let path = dir.write("simple.yml", YamlFixtures::simple());

    let outcome = reorder_file(&path, &sql_order(&["id", "email"])).unwrap();

    assert_eq!(
        outcome,
        Reconciliation::Reordered {
            columns: 2,
            dropped: vec!["name".to_string(), "created_at".to_string()],
        }
    );
    SchemaAssertions::assert_column_order(&path, &["id", "email"]);
}

#[test]
fn test_only_first_model_is_reconciled() {
    let dir = ModelDir::new();
    let path = dir.write("models.yml", YamlFixtures::two_models());

    assert!(reorder_file(&path, &sql_order(&["a", "b"])).unwrap().is_changed());

    let doc = SchemaAssertions::load(&path);
    assert_eq!(SchemaAssertions::column_names(&doc, 0), vec!["a", "b"]);
    assert_eq!(SchemaAssertions::column_names(&doc, 1), vec!["b", "a"]);
}

#[test]
fn test_long_descriptions_are_not_wrapped() {
    let long = "This description is long enough that a serializer with an eighty column limit would fold it onto a second line";
    let yaml = format!("models:\n- name: m\n  columns:\n  - name: b\n    description: {long}\n  - name: a\n");
    let dir = ModelDir::new();
    let path = dir.write("long.yml", &yaml);

    reorder_file(&path, &sql_order(&["a", "b"])).unwrap();

    let written = dir.read("long.yml");
    assert!(written.contains(&format!("    description: {long}\n")), "{written}");
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = ModelDir::new();
    let err = reorder_file(dir.path("absent.yml"), &sql_order(&["a"])).unwrap_err();
    assert!(matches!(err, SchemaError::NotFound(_)));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let dir = ModelDir::new();
    let path = dir.write("bad.yml", YamlFixtures::malformed());

    let err = reorder_file(&path, &sql_order(&["a"])).unwrap_err();

    assert!(matches!(err, SchemaError::Parse { .. }));
    assert_eq!(dir.read("bad.yml"), YamlFixtures::malformed());
}

#[test]
fn test_structural_errors_do_not_write() {
    let dir = ModelDir::new();
    let no_columns = dir.write("no_columns.yml", YamlFixtures::no_columns());
    let no_models = dir.write("no_models.yml", YamlFixtures::no_models());

    for path in [&no_columns, &no_models] {
        let err = reorder_file(path, &sql_order(&["a"])).unwrap_err();
        assert!(matches!(err, SchemaError::Structural { .. }), "{err}");
    }
    assert_eq!(dir.read("no_columns.yml"), YamlFixtures::no_columns());
    assert_eq!(dir.read("no_models.yml"), YamlFixtures::no_models());
}

#[test]
fn test_no_temporary_files_left_behind() {
    let dir = ModelDir::new();
    let path = dir.write("simple.yml", YamlFixtures::simple());

    reorder_file(&path, &sql_order(&["id", "email", "created_at", "name"])).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.root()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_comments_and_quoting_survive_a_reorder() {
    let dir = ModelDir::new();
    let path = dir.write("commented.yml", YamlFixtures::commented());

    let outcome = reorder_file(&path, &sql_order(&["a", "b"])).unwrap();

    assert!(outcome.is_changed());
    assert_eq!(
        dir.read("commented.yml"),
        "# Maintained by the analytics team
version: 2

models:
  - name: \"orders\"   # keep quoted
    description: 'Order facts'
    columns:
      - name: a
        description: 'single'
      # business key
      - name: b
        description: \"Quoted text\"
        tests: [unique]

    tests:
      - dbt_utils.expression_is_true:
          expression: \"a > 0\"
"
    );
}

#[test]
fn test_unchanged_document_is_not_rewritten() {
    let dir = ModelDir::new();
    let path = dir.write("commented.yml", YamlFixtures::commented());

    assert_eq!(reorder_file(&path, &sql_order(&["b", "a"])).unwrap(), Reconciliation::Unchanged);
    assert_eq!(dir.read("commented.yml"), YamlFixtures::commented());
}

#[test]
fn test_flow_style_columns_are_still_reordered() {
    let dir = ModelDir::new();
    let path = dir.write("flow.yml", "models:\n- name: m\n  columns: [{name: b, description: x}, {name: a}]\n");

    reorder_file(&path, &sql_order(&["a", "b"])).unwrap();

    SchemaAssertions::assert_column_order(&path, &["a", "b"]);
    let doc = SchemaAssertions::load(&path);
    SchemaAssertions::assert_column_property(&doc, "b", "description", "x");
}

#[test]
fn test_text_view_matches_file_after_read() {
    let dir = ModelDir::new();
    let path = dir.write("simple.yml", YamlFixtures::simple());
    let doc = Document::read(&path).unwrap();
    assert_eq!(doc.text(), YamlFixtures::simple());
}
