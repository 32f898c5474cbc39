//! Naming conventions for different programming languages.

use super::{Args, Helpers};

/// Language-specific naming conventions.
///
/// Defines how to transform table names, column names, and handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform table name to type name (e.g., "user_roles" -> "UserRoles")
    pub table_to_type: fn(&str) -> String,
    /// Transform column name to field name
    pub column_to_field: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.table_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.column_to_field)(name);
        self.safe_name(&transformed)
    }

    /// Register `type_name` and `field_name` helpers.
    pub fn register(self, helpers: &mut Helpers) {
        helpers.add("type_name", move |args: &Args<'_>| {
            Ok(self.type_name(args.str(0)?))
        });
        helpers.add("field_name", move |args: &Args<'_>| {
            Ok(self.field_name(args.str(0)?))
        });
    }
}
