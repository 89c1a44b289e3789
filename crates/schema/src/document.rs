// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema Documents
//!
//! A [`Document`] holds a schema file twice: the source text, which is what
//! gets written back, and the parsed `serde_yaml` tree, which answers
//! structural questions.
//!
//! Only the first model's `columns` list is given a typed view:
//! [`ColumnEntry`] pairs a column's `name` with its full property mapping.
//!
//! Reordering cuts the column items out of the source text and splices them
//! back in the new order, so comments, quoting and
//! everything outside the list are kept. When the list is not laid out one
//! item per block (flow style, for example) the reordered tree is
//! serialized with `serde_yaml` instead.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::layout::ColumnLayout;

const MODELS_KEY: &str = "models";
const COLUMNS_KEY: &str = "columns";
const NAME_KEY: &str = "name";

/// One column of a model: its name plus every property, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnEntry {
    name: String,
    fields: Mapping,
}

impl ColumnEntry {
    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All properties of the entry, `name` included
    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    /// Look up a property other than `name`
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Build an entry from a column list item, or explain why it is not one
    fn from_value(value: &Value) -> Result<Self, String> {
        let fields = value
            .as_mapping()
            .ok_or_else(|| "Column entry is not a mapping".to_string())?;
        let name = fields
            .get(NAME_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| "Column entry has no string 'name'".to_string())?;

        Ok(Self {
            name: name.to_string(),
            fields: fields.clone(),
        })
    }
}

/// A parsed schema file
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: PathBuf,
    text: String,
    root: Mapping,
}

impl Document {
    /// Read and parse the schema file at `path`
    pub fn read(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SchemaError::NotFound(path.to_path_buf()),
            _ => SchemaError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::parse(text, path)
    }

    /// Parse schema text; `path` is only used for error messages and writing
    pub fn parse(text: impl Into<String>, path: impl Into<PathBuf>) -> SchemaResult<Self> {
        let text = text.into();
        let path = path.into();
        let root: Mapping = serde_yaml::from_str(&text).map_err(|source| SchemaError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!("Loaded {} top-level keys from {}", root.len(), path.display());
        Ok(Self { path, text, root })
    }

    /// Path the document was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parsed tree
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Typed view of the first model's column list
    pub fn columns(&self) -> SchemaResult<Vec<ColumnEntry>> {
        column_items(&self.root, &self.path)?
            .iter()
            .map(|item| {
                ColumnEntry::from_value(item).map_err(|reason| SchemaError::structural(&self.path, reason))
            })
            .collect()
    }

    /// Rearrange the first model's columns as `order`, a list of indices into
    /// the current column list (repeats allowed).
    pub fn reorder_columns(&mut self, order: &[usize]) -> SchemaResult<()> {
        let items = column_items(&self.root, &self.path)?;
        let reordered = order
            .iter()
            .map(|&index| {
                items.get(index).cloned().ok_or_else(|| {
                    SchemaError::structural(&self.path, format!("Column index {index} out of range"))
                })
            })
            .collect::<SchemaResult<Vec<Value>>>()?;
        let count = items.len();

        let mut root = self.root.clone();
        *column_slot_mut(&mut root, &self.path)? = Value::Sequence(reordered);

        let text = match self.splice(order, count, &root) {
            Some(text) => text,
            None => {
                debug!(
                    "Column list of {} is not line-based; serializing the document",
                    self.path.display()
                );
                serde_yaml::to_string(&root).map_err(|source| SchemaError::Serialize {
                    path: self.path.clone(),
                    source,
                })?
            }
        };

        self.root = root;
        self.text = text;
        Ok(())
    }

    /// Source text with the column items moved, if it reads back as `expected`
    fn splice(&self, order: &[usize], count: usize, expected: &Mapping) -> Option<String> {
        if order.is_empty() {
            return None;
        }

        let layout = ColumnLayout::locate(&self.text)?;
        if layout.len() != count {
            return None;
        }

        let text = layout.splice(&self.text, order);
        let reread: Mapping = serde_yaml::from_str(&text).ok()?;
        (reread == *expected).then_some(text)
    }

    /// Write the document back to the path it was read from
    pub fn write(&self) -> SchemaResult<()> {
        self.write_to(&self.path)
    }

    /// Write the document to `path`.
    ///
    /// The text goes to a temporary file in the same directory which is then
    /// renamed over `path`, so a crash never leaves a half-written schema.
    /// The original file's permissions are kept.
    pub fn write_to(&self, path: &Path) -> SchemaResult<()> {
        let write_error = |source| SchemaError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
        tmp.write_all(self.text.as_bytes()).map_err(write_error)?;
        tmp.as_file().sync_all().map_err(write_error)?;

        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(tmp.path(), metadata.permissions()).map_err(write_error)?;
        }

        tmp.persist(path).map_err(|e| write_error(e.error))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

fn first_model<'a>(root: &'a Mapping, path: &Path) -> SchemaResult<&'a Mapping> {
    let models = root
        .get(MODELS_KEY)
        .and_then(Value::as_sequence)
        .filter(|models| !models.is_empty())
        .ok_or_else(|| SchemaError::structural(path, "No models found"))?;

    models[0]
        .as_mapping()
        .ok_or_else(|| SchemaError::structural(path, "First model is not a mapping"))
}

fn column_items<'a>(root: &'a Mapping, path: &Path) -> SchemaResult<&'a Vec<Value>> {
    first_model(root, path)?
        .get(COLUMNS_KEY)
        .ok_or_else(|| SchemaError::structural(path, "No columns found in model"))?
        .as_sequence()
        .ok_or_else(|| SchemaError::structural(path, "Model 'columns' is not a sequence"))
}

fn column_slot_mut<'a>(root: &'a mut Mapping, path: &Path) -> SchemaResult<&'a mut Value> {
    root.get_mut(MODELS_KEY)
        .and_then(Value::as_sequence_mut)
        .and_then(|models| models.first_mut())
        .and_then(Value::as_mapping_mut)
        .and_then(|model| model.get_mut(COLUMNS_KEY))
        .ok_or_else(|| SchemaError::structural(path, "No columns found in model"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = "version: 2\nmodels:\n- name: users\n  columns:\n  - name: id\n    description: Primary key\n  - description: Email\n    name: email\n";

    #[test]
    fn test_columns_view_keeps_order_and_fields() {
        let doc = Document::parse(SCHEMA, "schema.yml").unwrap();
        let columns = doc.columns().unwrap();

        let names: Vec<&str> = columns.iter().map(ColumnEntry::name).collect();
        assert_eq!(names, vec!["id", "email"]);
        assert_eq!(
            columns[0].property("description").and_then(Value::as_str),
            Some("Primary key")
        );
        // Key order inside the entry is untouched
        let keys: Vec<&str> = columns[1].fields().keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, vec!["description", "name"]);
    }

    #[test]
    fn test_reorder_columns_moves_source_text() {
        let mut doc = Document::parse(SCHEMA, "schema.yml").unwrap();
        doc.reorder_columns(&[1, 0]).unwrap();

        assert_eq!(
            doc.text(),
            "version: 2\nmodels:\n- name: users\n  columns:\n  - description: Email\n    name: email\n  - name: id\n    description: Primary key\n"
        );
        let names: Vec<String> = doc.columns().unwrap().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["email", "id"]);
    }

    #[test]
    fn test_flow_list_falls_back_to_serialization() {
        let mut doc =
            Document::parse("models:\n- name: m\n  columns: [{name: b}, {name: a}]\n", "schema.yml").unwrap();
        doc.reorder_columns(&[1, 0]).unwrap();

        assert_eq!(doc.text(), serde_yaml::to_string(doc.root()).unwrap());
        let names: Vec<String> = doc.columns().unwrap().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_dropping_every_column_leaves_an_empty_list() {
        let mut doc = Document::parse(SCHEMA, "schema.yml").unwrap();
        doc.reorder_columns(&[]).unwrap();

        let reread = Document::parse(doc.text().to_string(), "schema.yml").unwrap();
        assert!(reread.columns().unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_structural() {
        let mut doc = Document::parse(SCHEMA, "schema.yml").unwrap();
        let before = doc.clone();

        assert!(matches!(doc.reorder_columns(&[5]), Err(SchemaError::Structural { .. })));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_missing_models_is_structural() {
        let doc = Document::parse("version: 2\n", "schema.yml").unwrap();
        assert!(matches!(doc.columns(), Err(SchemaError::Structural { .. })));
    }

    #[test]
    fn test_empty_models_is_structural() {
        let doc = Document::parse("models: []\n", "schema.yml").unwrap();
        assert!(matches!(doc.columns(), Err(SchemaError::Structural { .. })));
    }

    #[test]
    fn test_column_without_name_is_structural() {
        let doc = Document::parse("models:\n- columns:\n  - description: x\n", "schema.yml").unwrap();
        let err = doc.columns().unwrap_err();
        assert!(err.to_string().contains("no string 'name'"), "{err}");
    }

    #[test]
    fn test_non_mapping_root_is_parse_error() {
        let err = Document::parse("- a\n- b\n", "schema.yml").unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
    }
}
