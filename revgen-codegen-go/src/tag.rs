//! xorm struct tags.

use revgen_codegen::{ColumnParam, TypeMapper};
use revgen_schema::IndexKind;

use crate::{GO_NAMING, GoTypeMapper};

/// Time columns filled in by xorm, by column name.
const AUTO_TIME_COLUMNS: [(&str, &str); 3] = [
    ("created_at", "created"),
    ("updated_at", "updated"),
    ("deleted_at", "deleted"),
];

/// Render the backquoted struct tag for a column.
///
/// Parts, in order: `not null` (omitted for an `int64` primary key named
/// `id`), `pk`, `default X`, `autoincr`, `created`/`updated`/`deleted` for
/// matching time columns, `comment('...')`, one `unique`/`index` per index
/// (with `(name)` for composite ones, sorted by index name), then the SQL
/// type. With `gen_json` a `json:"<column>"` tag comes first.
pub fn xorm_tag(param: &ColumnParam, gen_json: bool) -> String {
    let column = &param.column;
    let kind = column.kind();

    let is_id_pk = GO_NAMING.type_name(&column.name) == "Id"
        && GoTypeMapper.map_type(kind) == "int64";

    let mut parts = Vec::new();
    if !column.nullable && !is_id_pk {
        parts.push("not null".to_string());
    }
    if column.primary_key {
        parts.push("pk".to_string());
    }
    if let Some(default) = column.default.as_deref().filter(|d| !d.is_empty()) {
        parts.push(format!("default {}", default));
    }
    if column.auto_increment {
        parts.push("autoincr".to_string());
    }
    if kind.is_time() {
        for (name, part) in AUTO_TIME_COLUMNS {
            if column.name == name {
                parts.push(part.to_string());
            }
        }
    }
    if let Some(comment) = column.comment.as_deref().filter(|c| !c.is_empty()) {
        parts.push(format!("comment('{}')", comment));
    }

    let mut indexes: Vec<_> = param.index_refs.iter().collect();
    indexes.sort_by(|a, b| a.name.cmp(&b.name));
    for index in indexes {
        let mut part = match index.kind {
            IndexKind::Unique => "unique".to_string(),
            IndexKind::Index => "index".to_string(),
        };
        if index.composite {
            part.push_str(&format!("({})", index.name));
        }
        parts.push(part);
    }

    parts.push(column.sql_type.to_string());

    let mut tags = Vec::new();
    if gen_json {
        tags.push(format!("json:\"{}\"", column.name));
    }
    tags.push(format!("xorm:\"{}\"", parts.join(" ")));

    format!("`{}`", tags.join(" "))
}

#[cfg(test)]
mod tests {
    use revgen_codegen::IndexRef;
    use revgen_schema::Column;

    use super::*;

    fn param(column: Column) -> ColumnParam {
        ColumnParam {
            column,
            index_refs: Vec::new(),
        }
    }

    #[test]
    fn test_id_primary_key() {
        let tag = xorm_tag(&param(Column::new("id", "bigint(20)").primary()), false);
        assert_eq!(tag, "`xorm:\"pk autoincr bigint(20)\"`");
    }

    #[test]
    fn test_int_id_keeps_not_null() {
        let tag = xorm_tag(&param(Column::new("id", "int(11)").primary()), false);
        assert_eq!(tag, "`xorm:\"not null pk autoincr int(11)\"`");
    }

    #[test]
    fn test_nullable_with_default_and_comment() {
        let mut column = Column::new("nickname", "varchar(32)")
            .nullable()
            .with_default("''");
        column.comment = Some("display name".into());

        let tag = xorm_tag(&param(column), false);
        assert_eq!(
            tag,
            "`xorm:\"default '' comment('display name') varchar(32)\"`"
        );
    }

    #[test]
    fn test_auto_time_columns() {
        let tag = xorm_tag(&param(Column::new("created_at", "datetime")), false);
        assert_eq!(tag, "`xorm:\"not null created datetime\"`");

        let tag = xorm_tag(&param(Column::new("deleted_at", "varchar(10)")), false);
        assert_eq!(tag, "`xorm:\"not null varchar(10)\"`");
    }

    #[test]
    fn test_indexes_sorted_with_composite_names() {
        let param = ColumnParam {
            column: Column::new("user_id", "bigint"),
            index_refs: vec![
                IndexRef {
                    name: "uq_user_sku".into(),
                    kind: IndexKind::Unique,
                    composite: true,
                },
                IndexRef {
                    name: "idx_user".into(),
                    kind: IndexKind::Index,
                    composite: false,
                },
            ],
        };

        assert_eq!(
            xorm_tag(&param, false),
            "`xorm:\"not null index unique(uq_user_sku) bigint\"`"
        );
    }

    #[test]
    fn test_json_tag() {
        let tag = xorm_tag(&param(Column::new("name", "text")), true);
        assert_eq!(tag, "`json:\"name\" xorm:\"not null text\"`");
    }
}
