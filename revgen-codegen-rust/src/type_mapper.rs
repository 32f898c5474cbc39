//! Rust type mapper implementation.

use revgen_codegen::TypeMapper;
use revgen_schema::TypeKind;

/// Rust type mapper implementation.
///
/// Non-primitive types are emitted by their short name; the binding imports
/// them (see [`RustTypeMapper::import_path`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl RustTypeMapper {
    /// Full path of the type used for `kind`, when it needs a `use`.
    pub fn import_path(&self, kind: TypeKind) -> Option<&'static str> {
        match kind {
            TypeKind::Decimal => Some("rust_decimal::Decimal"),
            TypeKind::Uuid => Some("uuid::Uuid"),
            TypeKind::Json => Some("serde_json::Value"),
            TypeKind::Date => Some("chrono::NaiveDate"),
            TypeKind::Time => Some("chrono::NaiveTime"),
            TypeKind::DateTime => Some("chrono::NaiveDateTime"),
            _ => None,
        }
    }

    /// Whether the mapped type implements `Eq`.
    pub fn is_eq(&self, kind: TypeKind) -> bool {
        !matches!(
            kind,
            TypeKind::Float | TypeKind::Double | TypeKind::Json
        )
    }
}

impl TypeMapper for RustTypeMapper {
    fn map_type(&self, kind: TypeKind) -> &'static str {
        match kind {
            TypeKind::Bool => "bool",
            TypeKind::Int => "i32",
            TypeKind::BigInt => "i64",
            TypeKind::Float => "f32",
            TypeKind::Double => "f64",
            TypeKind::Decimal => "Decimal",
            TypeKind::Text | TypeKind::Unknown => "String",
            TypeKind::Uuid => "Uuid",
            TypeKind::Json => "Value",
            TypeKind::Binary => "Vec<u8>",
            TypeKind::Date => "NaiveDate",
            TypeKind::Time => "NaiveTime",
            TypeKind::DateTime => "NaiveDateTime",
        }
    }

    fn map_nullable_type(&self, kind: TypeKind) -> String {
        format!("Option<{}>", self.map_type(kind))
    }
}
