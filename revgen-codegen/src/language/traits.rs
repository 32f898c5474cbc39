//! Language binding traits.

use revgen_schema::{Table, TypeKind};

use super::{Helpers, NamingConvention};
use crate::{FormatError, ImportMap};

/// Rewrites generated source, or rejects it.
pub type Formatter = fn(&str) -> Result<String, FormatError>;

/// Run configuration handed to a binding when it registers helpers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindingOptions {
    /// Emit JSON tags/derives alongside the ORM ones.
    pub gen_json: bool,
}

/// Trait for language bindings.
///
/// A binding is registered once per process and never mutated. Everything
/// that varies per run comes in through [`BindingOptions`].
pub trait LanguageBinding: Send + Sync {
    /// Language identifier (e.g., "go", "rust", "cpp")
    fn language(&self) -> &'static str;

    /// Naming rules used by the `type_name` and `field_name` helpers.
    fn naming(&self) -> NamingConvention;

    /// Template helpers, including the shared case helpers.
    fn helpers(&self, options: &BindingOptions) -> Helpers;

    /// Imports needed by generated code for `tables`.
    fn imports(&self, tables: &[&Table]) -> ImportMap;

    /// Formatter applied to rendered output.
    ///
    /// Default implementation returns `None` (no formatting).
    fn formatter(&self) -> Option<Formatter> {
        None
    }
}

/// Trait for mapping SQL type kinds to language-specific type strings.
pub trait TypeMapper {
    /// Map a type kind to a language-specific type string
    fn map_type(&self, kind: TypeKind) -> &'static str;

    /// Map a nullable column's type (e.g., `Option<i64>` in Rust)
    fn map_nullable_type(&self, kind: TypeKind) -> String {
        self.map_type(kind).to_string()
    }

    /// Map a column type, honoring nullability.
    fn map_column_type(&self, kind: TypeKind, nullable: bool) -> String {
        if nullable {
            self.map_nullable_type(kind)
        } else {
            self.map_type(kind).to_string()
        }
    }
}
