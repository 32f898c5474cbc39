//! Go type mapper implementation.

use revgen_codegen::TypeMapper;
use revgen_schema::TypeKind;

/// Go type mapper implementation.
///
/// Nullable columns keep their plain type; xorm maps NULL to the zero value.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn map_type(&self, kind: TypeKind) -> &'static str {
        match kind {
            TypeKind::Bool => "bool",
            TypeKind::Int => "int",
            TypeKind::BigInt => "int64",
            TypeKind::Float => "float32",
            TypeKind::Double => "float64",
            TypeKind::Binary => "[]byte",
            TypeKind::Date | TypeKind::Time | TypeKind::DateTime => "time.Time",
            TypeKind::Decimal
            | TypeKind::Text
            | TypeKind::Uuid
            | TypeKind::Json
            | TypeKind::Unknown => "string",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_type() {
        let mapper = GoTypeMapper;
        assert_eq!(mapper.map_type(TypeKind::BigInt), "int64");
        assert_eq!(mapper.map_type(TypeKind::Binary), "[]byte");
        assert_eq!(mapper.map_type(TypeKind::DateTime), "time.Time");
        assert_eq!(mapper.map_type(TypeKind::Decimal), "string");
        assert_eq!(mapper.map_column_type(TypeKind::Int, true), "int");
    }
}
