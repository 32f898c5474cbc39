//! Schema snapshots.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, Table, TableFilter};

/// An introspected database: its tables in the order the driver listed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Driver that produced the snapshot (`mysql`, `postgres`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Schema {
    /// Create a schema from tables.
    pub fn new(tables: Vec<Table>) -> Self {
        Self {
            driver: None,
            tables,
        }
    }

    /// Load a snapshot file. `.toml` files are read as TOML, anything else as
    /// JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(&content).map_err(|source| Error::Toml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_json::from_str(&content).map_err(|source| Error::Json {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Apply an optional table filter, consuming the schema.
    pub fn into_filtered(self, filter: Option<&TableFilter>) -> Vec<Table> {
        match filter {
            Some(filter) => filter.apply(self.tables),
            None => self.tables,
        }
    }
}
