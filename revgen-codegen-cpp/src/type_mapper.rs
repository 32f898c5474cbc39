//! C++ type mapper implementation.

use revgen_codegen::TypeMapper;
use revgen_schema::TypeKind;

/// C++ type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppTypeMapper;

impl CppTypeMapper {
    /// Standard header providing the type used for `kind`, if any.
    pub fn header(&self, kind: TypeKind) -> Option<&'static str> {
        match kind {
            TypeKind::BigInt => Some("cstdint"),
            TypeKind::Decimal
            | TypeKind::Text
            | TypeKind::Uuid
            | TypeKind::Json
            | TypeKind::Unknown => Some("string"),
            TypeKind::Binary => Some("vector"),
            TypeKind::Date | TypeKind::Time | TypeKind::DateTime => Some("ctime"),
            TypeKind::Bool | TypeKind::Int | TypeKind::Float | TypeKind::Double => None,
        }
    }
}

impl TypeMapper for CppTypeMapper {
    fn map_type(&self, kind: TypeKind) -> &'static str {
        match kind {
            TypeKind::Bool => "bool",
            TypeKind::Int => "int",
            TypeKind::BigInt => "int64_t",
            TypeKind::Float => "float",
            TypeKind::Double => "double",
            TypeKind::Binary => "std::vector<uint8_t>",
            TypeKind::Date | TypeKind::Time | TypeKind::DateTime => "std::time_t",
            TypeKind::Decimal
            | TypeKind::Text
            | TypeKind::Uuid
            | TypeKind::Json
            | TypeKind::Unknown => "std::string",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_type() {
        let mapper = CppTypeMapper;
        assert_eq!(mapper.map_type(TypeKind::BigInt), "int64_t");
        assert_eq!(mapper.map_type(TypeKind::Text), "std::string");
        assert_eq!(mapper.map_column_type(TypeKind::Date, true), "std::time_t");
        assert_eq!(mapper.header(TypeKind::Binary), Some("vector"));
        assert_eq!(mapper.header(TypeKind::Int), None);
    }
}
