//! C++-specific naming conventions.

use revgen_codegen::NamingConvention;
use revgen_core::{to_camel_case, to_pascal_case};

fn escape_cpp_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// C++ naming conventions: PascalCase classes, camelCase members.
pub const CPP_NAMING: NamingConvention = NamingConvention {
    table_to_type: to_pascal_case,
    column_to_field: to_camel_case,
    reserved_words: &[
        "auto", "bool", "break", "case", "catch", "char", "class", "const", "continue", "default",
        "delete", "do", "double", "else", "enum", "explicit", "extern", "false", "float", "for",
        "friend", "goto", "if", "int", "long", "namespace", "new", "operator", "private",
        "protected", "public", "register", "return", "short", "signed", "sizeof", "static",
        "struct", "switch", "template", "this", "throw", "true", "try", "typedef", "union",
        "unsigned", "using", "virtual", "void", "volatile", "while",
    ],
    escape_reserved: escape_cpp_reserved,
};
