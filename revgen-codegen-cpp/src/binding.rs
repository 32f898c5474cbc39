//! The C++ [`LanguageBinding`].

use revgen_codegen::{
    Args, BindingOptions, Helpers, ImportMap, LanguageBinding, NamingConvention, TypeMapper,
};
use revgen_schema::Table;

use crate::{CPP_NAMING, CppTypeMapper};

/// C++ binding.
///
/// Helpers, on top of the common set and the naming helpers:
/// - `type`: C++ type of a column
///
/// Imports map a header name to its `#include` operand, e.g.
/// `string -> <string>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppBinding;

impl LanguageBinding for CppBinding {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn naming(&self) -> NamingConvention {
        CPP_NAMING
    }

    fn helpers(&self, _options: &BindingOptions) -> Helpers {
        let mut helpers = Helpers::common();
        self.naming().register(&mut helpers);
        helpers.add("type", |args: &Args<'_>| {
            let column = args.column(0)?.column;
            Ok(CppTypeMapper.map_column_type(column.kind(), column.nullable))
        });
        helpers
    }

    fn imports(&self, tables: &[&Table]) -> ImportMap {
        tables
            .iter()
            .flat_map(|t| &t.columns)
            .filter_map(|c| CppTypeMapper.header(c.kind()))
            .map(|header| (header, format!("<{}>", header)))
            .collect()
    }
}
