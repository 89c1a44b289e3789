// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Schema-specific test helpers and custom assertions

use std::path::Path;

use serde_yaml::Value;

/// Custom assertion helpers for schema documents
pub struct SchemaAssertions;

impl SchemaAssertions {
    /// Parse a schema file into a generic YAML value
    pub fn load(path: &Path) -> Value {
        let text = std::fs::read_to_string(path).expect("failed to read schema file");
        serde_yaml::from_str(&text).expect("schema file is not valid YAML")
    }

    /// Column entries of the model at `index`
    pub fn columns(doc: &Value, index: usize) -> Vec<Value> {
        doc["models"][index]["columns"]
            .as_sequence()
            .unwrap_or_else(|| panic!("model {index} has no columns sequence"))
            .clone()
    }

    /// Column names of the model at `index`, in listed order
    pub fn column_names(doc: &Value, index: usize) -> Vec<String> {
        Self::columns(doc, index)
            .iter()
            .map(|column| {
                column["name"]
                    .as_str()
                    .unwrap_or_else(|| panic!("column without a string name: {column:?}"))
                    .to_string()
            })
            .collect()
    }

    /// Assert the first model of the file at `path` lists `expected` columns
    pub fn assert_column_order(path: &Path, expected: &[&str]) {
        let doc = Self::load(path);
        let names = Self::column_names(&doc, 0);
        assert_eq!(
            names, expected,
            "Column order mismatch in {}",
            path.display()
        );
    }

    /// Assert the column `name` of the first model has `key: value`
    pub fn assert_column_property(doc: &Value, name: &str, key: &str, value: &str) {
        let column = Self::columns(doc, 0)
            .into_iter()
            .find(|column| column["name"].as_str() == Some(name))
            .unwrap_or_else(|| panic!("column '{name}' not found"));
        assert_eq!(
            column[key].as_str(),
            Some(value),
            "Property '{key}' of column '{name}' mismatch"
        );
    }
}
