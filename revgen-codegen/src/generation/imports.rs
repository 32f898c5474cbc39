//! Import collection for generated files.

use std::collections::BTreeMap;

use serde::Serialize;

/// Imports required by one render context, keyed by alias.
///
/// Serialized as a plain object (`{"time": "time"}`) so templates can iterate
/// it with `{{#each imports}}`. Keys are kept sorted for deterministic output.
///
/// # Example
///
/// ```
/// use revgen_codegen::ImportMap;
///
/// let mut imports = ImportMap::new();
/// imports.add("time", "time");
/// imports.add("decimal", "github.com/shopspring/decimal");
///
/// let aliases: Vec<&str> = imports.iter().map(|(alias, _)| alias).collect();
/// assert_eq!(aliases, ["decimal", "time"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImportMap {
    imports: BTreeMap<String, String>,
}

impl ImportMap {
    /// Create an empty import map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import. The first path registered for an alias wins.
    pub fn add(&mut self, alias: impl Into<String>, path: impl Into<String>) {
        self.imports.entry(alias.into()).or_insert_with(|| path.into());
    }

    /// Merge another map into this one.
    pub fn merge(&mut self, other: &ImportMap) {
        for (alias, path) in &other.imports {
            self.add(alias.as_str(), path.as_str());
        }
    }

    /// Check if an alias is already imported.
    pub fn contains(&self, alias: &str) -> bool {
        self.imports.contains_key(alias)
    }

    /// Path registered for `alias`.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.imports.get(alias).map(String::as_str)
    }

    /// Iterate over `(alias, path)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of imports.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

impl<A: Into<String>, P: Into<String>> FromIterator<(A, P)> for ImportMap {
    fn from_iter<I: IntoIterator<Item = (A, P)>>(iter: I) -> Self {
        let mut imports = Self::new();
        for (alias, path) in iter {
            imports.add(alias, path);
        }
        imports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_map_basic() {
        let mut imports = ImportMap::new();
        imports.add("time", "time");
        imports.add("time", "other/time");

        assert!(imports.contains("time"));
        assert_eq!(imports.get("time"), Some("time"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_import_map_merge() {
        let mut a: ImportMap = [("time", "time")].into_iter().collect();
        let b: ImportMap = [("decimal", "github.com/shopspring/decimal")]
            .into_iter()
            .collect();

        a.merge(&b);

        assert!(a.contains("time"));
        assert!(a.contains("decimal"));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_import_map_serializes_as_object() {
        let imports: ImportMap = [("time", "time")].into_iter().collect();
        let value = serde_json::to_value(&imports).unwrap();
        assert_eq!(value, serde_json::json!({"time": "time"}));
    }
}
