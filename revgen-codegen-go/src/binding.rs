//! The Go [`LanguageBinding`].

use revgen_codegen::{
    Args, BindingOptions, Formatter, Helpers, ImportMap, LanguageBinding, NamingConvention,
    TypeMapper,
};
use revgen_schema::Table;

use crate::{GO_NAMING, GoTypeMapper, format_go, xorm_tag};

/// Go binding.
///
/// Helpers, on top of the common set:
/// - `mapper`: table or column name to exported Go identifier
/// - `type`: Go type of a column
/// - `tag`: xorm struct tag of a column
#[derive(Debug, Clone, Copy, Default)]
pub struct GoBinding;

impl LanguageBinding for GoBinding {
    fn language(&self) -> &'static str {
        "go"
    }

    fn naming(&self) -> NamingConvention {
        GO_NAMING
    }

    fn helpers(&self, options: &BindingOptions) -> Helpers {
        let mut helpers = Helpers::common();
        self.naming().register(&mut helpers);

        let gen_json = options.gen_json;
        helpers
            .unary("mapper", |name| GO_NAMING.type_name(name))
            .add("type", |args: &Args<'_>| {
                let column = args.column(0)?.column;
                Ok(GoTypeMapper.map_column_type(column.kind(), column.nullable))
            })
            .add("tag", move |args: &Args<'_>| {
                Ok(xorm_tag(&args.column(0)?, gen_json))
            });
        helpers
    }

    fn imports(&self, tables: &[&Table]) -> ImportMap {
        let mut imports = ImportMap::new();
        let uses_time = tables
            .iter()
            .flat_map(|t| &t.columns)
            .any(|c| GoTypeMapper.map_type(c.kind()) == "time.Time");
        if uses_time {
            imports.add("time", "time");
        }
        imports
    }

    fn formatter(&self) -> Option<Formatter> {
        Some(format_go)
    }
}

#[cfg(test)]
mod tests {
    use revgen_schema::Column;
    use serde_json::json;

    use super::*;

    fn column_json(column: Column) -> serde_json::Value {
        let mut value = serde_json::to_value(&column).unwrap();
        value["index_refs"] = json!([]);
        value
    }

    #[test]
    fn test_type_helper() {
        let helpers = GoBinding.helpers(&BindingOptions::default());
        let out = helpers
            .call("type", &[column_json(Column::new("price", "double"))])
            .unwrap()
            .unwrap();
        assert_eq!(out, "float64");
    }

    #[test]
    fn test_tag_helper_honors_gen_json() {
        let helpers = GoBinding.helpers(&BindingOptions { gen_json: true });
        let out = helpers
            .call("tag", &[column_json(Column::new("name", "varchar(64)"))])
            .unwrap()
            .unwrap();
        assert_eq!(out, "`json:\"name\" xorm:\"not null varchar(64)\"`");
    }

    #[test]
    fn test_mapper_helper() {
        let helpers = GoBinding.helpers(&BindingOptions::default());
        let out = helpers.call("mapper", &[json!("order_items")]).unwrap().unwrap();
        assert_eq!(out, "OrderItems");
    }

    #[test]
    fn test_imports_time_only_when_needed() {
        let users = Table::new("users").with_column(Column::new("id", "bigint"));
        let events = Table::new("events").with_column(Column::new("at", "timestamp"));

        assert!(GoBinding.imports(&[&users]).is_empty());
        assert_eq!(GoBinding.imports(&[&users, &events]).get("time"), Some("time"));
    }
}
