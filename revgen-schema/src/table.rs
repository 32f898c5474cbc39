//! Tables, columns and indexes.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{SqlType, TypeKind};

/// Remove `prefix` from the start of `name`, once.
///
/// An empty prefix, or a name that does not start with it, is returned as
/// is. Stripping the result again with the same prefix is a no-op unless the
/// name carried the prefix twice.
pub fn strip_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return name;
    }
    name.strip_prefix(prefix).unwrap_or(name)
}

/// One database table as found by introspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Raw table name in the database.
    pub name: String,
    /// Columns in declaration order.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Names of the primary key columns.
    #[serde(default)]
    pub primary_keys: Vec<String>,
    /// Indexes keyed by index name.
    #[serde(default)]
    pub indexes: IndexMap<String, Index>,
    /// Table comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Driver-specific metadata (engine, charset, ...). Passed through to
    /// templates untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, serde_json::Value>,
}

impl Table {
    /// Create an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_keys: Vec::new(),
            indexes: IndexMap::new(),
            comment: None,
            meta: BTreeMap::new(),
        }
    }

    /// Append a column, registering it as a primary key when flagged.
    pub fn with_column(mut self, column: Column) -> Self {
        if column.primary_key && !self.primary_keys.contains(&column.name) {
            self.primary_keys.push(column.name.clone());
        }
        self.columns.push(column);
        self
    }

    /// Add an index and record membership on its columns.
    pub fn with_index(mut self, index: Index) -> Self {
        for column in &mut self.columns {
            if index.columns.contains(&column.name) && !column.indexes.contains(&index.name) {
                column.indexes.push(index.name.clone());
            }
        }
        self.indexes.insert(index.name.clone(), index);
        self
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Name exposed to templates: the raw name without `prefix`.
    pub fn display_name(&self, prefix: &str) -> &str {
        strip_prefix(&self.name, prefix)
    }
}

/// One column of a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(alias = "type")]
    pub sql_type: SqlType,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_increment: bool,
    /// Default value expression, verbatim.
    #[serde(default)]
    pub default: Option<String>,
    /// Names of the indexes this column participates in.
    #[serde(default)]
    pub indexes: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Column {
    /// Create a non-null column.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: SqlType::parse(&sql_type.into()),
            nullable: false,
            primary_key: false,
            auto_increment: false,
            default: None,
            indexes: Vec::new(),
            comment: None,
        }
    }

    /// Mark as an auto-incrementing primary key.
    pub fn primary(mut self) -> Self {
        self.primary_key = true;
        self.auto_increment = true;
        self
    }

    /// Mark as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the default value expression.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Classification of the declared type.
    pub fn kind(&self) -> TypeKind {
        self.sql_type.kind()
    }
}

/// Kind of table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    #[default]
    Index,
    Unique,
}

/// A table index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    #[serde(default)]
    pub kind: IndexKind,
    pub columns: Vec<String>,
}

impl Index {
    /// Create an index over `columns`.
    pub fn new(name: impl Into<String>, kind: IndexKind, columns: &[&str]) -> Self {
        Self {
            name: name.into(),
            kind,
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Whether the index spans more than one column.
    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}
