//! The Rust [`LanguageBinding`].

use revgen_codegen::{
    Args, BindingOptions, Formatter, Helpers, ImportMap, LanguageBinding, NamingConvention,
    TypeMapper,
};
use revgen_schema::Table;

use crate::{RUST_NAMING, RustTypeMapper, format_rust};

/// Rust binding.
///
/// Helpers, on top of the common set and the naming helpers:
/// - `type`: Rust type of a column, `Option<_>` when nullable
/// - `derives`: derive list for a table's struct
#[derive(Debug, Clone, Copy, Default)]
pub struct RustBinding;

impl LanguageBinding for RustBinding {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn naming(&self) -> NamingConvention {
        RUST_NAMING
    }

    fn helpers(&self, options: &BindingOptions) -> Helpers {
        let mut helpers = Helpers::common();
        self.naming().register(&mut helpers);

        let gen_json = options.gen_json;
        helpers
            .add("type", |args: &Args<'_>| {
                let column = args.column(0)?.column;
                Ok(RustTypeMapper.map_column_type(column.kind(), column.nullable))
            })
            .add("derives", move |args: &Args<'_>| {
                let columns = args.columns(0)?;
                let mut derives = vec!["Debug", "Clone", "PartialEq"];
                if columns.iter().all(|c| RustTypeMapper.is_eq(c.column.kind())) {
                    derives.push("Eq");
                }
                if gen_json {
                    derives.extend(["serde::Serialize", "serde::Deserialize"]);
                }
                Ok(derives.join(", "))
            });
        helpers
    }

    fn imports(&self, tables: &[&Table]) -> ImportMap {
        tables
            .iter()
            .flat_map(|t| &t.columns)
            .filter_map(|c| RustTypeMapper.import_path(c.kind()))
            .map(|path| (path.rsplit("::").next().unwrap_or(path), path))
            .collect()
    }

    fn formatter(&self) -> Option<Formatter> {
        Some(format_rust)
    }
}
