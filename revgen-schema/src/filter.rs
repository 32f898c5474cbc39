//! Table name filtering.

use regex::Regex;

use crate::Table;

/// Keeps only tables whose raw name matches a regular expression.
///
/// The match is unanchored, like `Regex::is_match`: `user` keeps both
/// `users` and `user_roles`.
#[derive(Debug, Clone)]
pub struct TableFilter {
    pattern: Regex,
}

impl TableFilter {
    /// Compile a filter expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The source expression.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether a table name passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Retain matching tables, preserving order.
    pub fn apply(&self, tables: Vec<Table>) -> Vec<Table> {
        tables
            .into_iter()
            .filter(|t| self.matches(&t.name))
            .collect()
    }
}
