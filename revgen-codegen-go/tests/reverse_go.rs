//! End-to-end generation with the Go binding.
//!
//! Tests that need `gofmt` are ignored by default; run them with
//! `cargo test -- --ignored` where Go is installed.

use revgen_codegen::{
    BindingOptions, Error, GenerateOptions, Strategy,
    testing::{Fixture, users_and_orders},
};
use revgen_codegen_go::{GoBinding, format_go};
use revgen_schema::{Column, Table};

const MODEL_TEMPLATE: &str = r#"package {{model}}

{{#each imports}}import "{{this}}"
{{/each~}}
{{#each tables}}
type {{mapper name}} struct {
{{#each columns}}	{{mapper name}} {{type this}} {{tag this}}
{{/each~}}
}
{{/each~}}
"#;

fn users_and_orders_go() -> Vec<Table> {
    vec![
        Table::new("users")
            .with_column(Column::new("id", "bigint").primary())
            .with_column(Column::new("name", "varchar(64)")),
        Table::new("orders")
            .with_column(Column::new("id", "bigint").primary())
            .with_column(Column::new("user_id", "bigint")),
    ]
}

#[test]
#[ignore = "requires gofmt"]
fn test_multi_file_models_are_gofmt_formatted() {
    let fixture = Fixture::new();
    fixture.template("model.go.tpl", MODEL_TEMPLATE);

    let tables = users_and_orders_go();
    let report = fixture.run_with(&GoBinding, &tables, GenerateOptions::default());

    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert_eq!(fixture.output_files(), vec!["orders.go", "users.go"]);
    assert!(report.outputs.iter().all(|o| o.formatted));

    let users = fixture.read("users.go");
    assert!(users.starts_with("package model\n"));
    assert!(users.contains("type Users struct {\n"));
    assert!(users.contains("\tId   int64  `xorm:\"pk autoincr bigint\"`\n"));
    assert!(users.contains("\tName string `xorm:\"not null varchar(64)\"`\n"));
    assert!(!users.contains("Orders"));

    let orders = fixture.read("orders.go");
    assert!(orders.contains("type Orders struct {\n"));
    assert!(orders.contains("UserId int64"));
    assert!(!orders.contains("Users"));
}

#[test]
#[ignore = "requires gofmt"]
fn test_time_import_follows_table() {
    let fixture = Fixture::new();
    fixture.template("model.go.tpl", MODEL_TEMPLATE);

    let tables = users_and_orders();
    let report = fixture.run_with(&GoBinding, &tables, GenerateOptions::default());

    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert!(!fixture.read("users.go").contains("import"));

    let orders = fixture.read("orders.go");
    assert!(orders.contains("import \"time\""));
    assert!(orders.contains("xorm:\"created datetime\""));
}

#[test]
#[ignore = "requires gofmt"]
fn test_syntax_error_fails_only_that_table() {
    let fixture = Fixture::new();
    fixture.template(
        "funcs.go.tpl",
        "package model\n\n{{#each tables}}func {{name}}() {}\n{{/each}}",
    );

    let tables = vec![Table::new("users"), Table::new("select")];
    let report = fixture.run_with(&GoBinding, &tables, GenerateOptions::default());

    assert_eq!(fixture.output_files(), vec!["users.go"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].table.as_deref(), Some("select"));
    assert!(matches!(report.failures[0].error, Error::Format { .. }));
}

#[test]
#[ignore = "requires gofmt"]
fn test_generated_models_are_stable_under_gofmt() {
    let fixture = Fixture::new();
    fixture.template("model.go.tpl", MODEL_TEMPLATE);

    let tables = users_and_orders();
    let report = fixture.run_with(&GoBinding, &tables, GenerateOptions::default());
    assert!(report.is_success(), "failures: {:?}", report.failures);

    for name in ["users.go", "orders.go"] {
        let formatted = fixture.read(name);
        assert_eq!(format_go(&formatted).unwrap(), formatted, "{name} changed");
    }
}

#[test]
#[ignore = "requires gofmt"]
fn test_format_go_is_idempotent() {
    let source = "package model\ntype Users struct{\nId int64 `xorm:\"pk\"`\nName string\n}\n";
    let once = format_go(source).unwrap();
    assert_ne!(once, source);
    assert_eq!(format_go(&once).unwrap(), once);
}

#[test]
fn test_protobuf_template_is_not_formatted() {
    let fixture = Fixture::new();
    fixture.template(
        "protobuf.proto.tpl",
        "{{#each tables}}message {{mapper name}} {}\n{{/each}}",
    );

    let tables = users_and_orders_go();
    let report = fixture.run_with(&GoBinding, &tables, GenerateOptions::default());

    assert!(report.is_success());
    assert!(!report.outputs[0].formatted);
    insta::assert_snapshot!(fixture.read("protobuf.proto"), @r"
    message Users {}
    message Orders {}
    ");
}

#[test]
fn test_single_file_with_json_tags_unformatted() {
    let fixture = Fixture::new();
    fixture.template(
        "tags.txt.tpl",
        "{{#each tables}}{{#each columns}}{{tag this}}\n{{/each}}{{/each}}",
    );

    let tables = users_and_orders_go();
    fixture.run_with(
        &GoBinding,
        &tables,
        GenerateOptions {
            strategy: Strategy::SingleFile,
            binding: BindingOptions { gen_json: true },
            format: false,
            ..GenerateOptions::default()
        },
    );

    insta::assert_snapshot!(fixture.read("tags.txt"), @r#"
    `json:"id" xorm:"pk autoincr bigint"`
    `json:"name" xorm:"not null varchar(64)"`
    `json:"id" xorm:"pk autoincr bigint"`
    `json:"user_id" xorm:"not null bigint"`
    "#);
}
