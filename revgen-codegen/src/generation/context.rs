//! Render contexts.
//!
//! Templates never see [`Table`] directly. They see a [`TableView`] whose
//! `name` is the display name (prefix stripped) and whose columns carry
//! resolved index information, so helpers can emit index tags without
//! looking back at the table.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use revgen_schema::{Column, Index, IndexKind, Table};
use serde::{Deserialize, Serialize};

use super::ImportMap;

/// Everything a single template execution can see.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    /// Exactly one table in multi-file mode, every filtered table otherwise.
    pub tables: Vec<TableView<'a>>,
    /// Imports synthesized by the binding for `tables`.
    pub imports: ImportMap,
    /// Base name of the output directory.
    pub model: &'a str,
}

impl<'a> RenderContext<'a> {
    /// Build a context, deriving each table's display name from `prefix`.
    pub fn new(tables: &[&'a Table], prefix: &str, imports: ImportMap, model: &'a str) -> Self {
        Self {
            tables: tables
                .iter()
                .map(|table| TableView::new(table, prefix))
                .collect(),
            imports,
            model,
        }
    }
}

/// A table as exposed to templates.
#[derive(Debug, Clone, Serialize)]
pub struct TableView<'a> {
    /// Display name: the raw name with the prefix removed once.
    pub name: &'a str,
    /// Name in the database.
    pub raw_name: &'a str,
    pub columns: Vec<ColumnView<'a>>,
    pub primary_keys: &'a [String],
    pub indexes: &'a IndexMap<String, Index>,
    pub comment: Option<&'a str>,
    pub meta: &'a BTreeMap<String, serde_json::Value>,
}

impl<'a> TableView<'a> {
    pub fn new(table: &'a Table, prefix: &str) -> Self {
        Self {
            name: table.display_name(prefix),
            raw_name: &table.name,
            columns: table
                .columns
                .iter()
                .map(|column| ColumnView::new(column, table))
                .collect(),
            primary_keys: &table.primary_keys,
            indexes: &table.indexes,
            comment: table.comment.as_deref(),
            meta: &table.meta,
        }
    }
}

/// A column plus the indexes it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnView<'a> {
    #[serde(flatten)]
    pub column: &'a Column,
    pub index_refs: Vec<IndexRef>,
}

impl<'a> ColumnView<'a> {
    fn new(column: &'a Column, table: &'a Table) -> Self {
        let index_refs = column
            .indexes
            .iter()
            .filter_map(|name| table.indexes.get(name))
            .map(IndexRef::from)
            .collect();
        Self { column, index_refs }
    }
}

/// Index membership of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRef {
    pub name: String,
    pub kind: IndexKind,
    /// Whether the index spans more than one column.
    pub composite: bool,
}

impl From<&Index> for IndexRef {
    fn from(index: &Index) -> Self {
        Self {
            name: index.name.clone(),
            kind: index.kind,
            composite: index.is_composite(),
        }
    }
}

/// A [`ColumnView`] read back from a helper parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnParam {
    #[serde(flatten)]
    pub column: Column,
    #[serde(default)]
    pub index_refs: Vec<IndexRef>,
}
