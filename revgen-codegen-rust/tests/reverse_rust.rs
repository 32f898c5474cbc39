//! End-to-end generation with the Rust binding.

use revgen_codegen::{
    BindingOptions, Error, GenerateOptions, Strategy,
    testing::{Fixture, users_and_orders},
};
use revgen_codegen_rust::RustBinding;
use revgen_schema::{Column, Table};

const MODEL_TEMPLATE: &str = "{{#each imports}}use {{this}};\n{{/each}}\
{{#each tables}}#[derive({{derives this}})]\n\
pub struct {{type_name name}} { {{#each columns}}pub {{field_name name}}: {{type this}}, {{/each}} }\n\
{{/each}}";

#[test]
fn test_multi_file_models_are_pretty_printed() {
    let fixture = Fixture::new();
    fixture.template("model.rs.tpl", MODEL_TEMPLATE);

    let tables = users_and_orders();
    let report = fixture.run_with(&RustBinding, &tables, GenerateOptions::default());

    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert_eq!(fixture.output_files(), vec!["orders.rs", "users.rs"]);

    insta::assert_snapshot!(fixture.read("users.rs"), @r"
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Users {
        pub id: i64,
        pub name: String,
    }
    ");

    let orders = fixture.read("orders.rs");
    assert!(orders.contains("use chrono::NaiveDateTime;"));
    assert!(orders.contains("    pub created_at: Option<NaiveDateTime>,\n"));
    assert!(!orders.contains("Users"));
}

#[test]
fn test_invalid_identifier_fails_only_that_file() {
    let fixture = Fixture::new();
    fixture.template("model.rs.tpl", MODEL_TEMPLATE);

    let tables = vec![
        Table::new("users").with_column(Column::new("id", "bigint")),
        Table::new("1st_quarter").with_column(Column::new("id", "bigint")),
    ];
    let report = fixture.run_with(&RustBinding, &tables, GenerateOptions::default());

    assert_eq!(fixture.output_files(), vec!["users.rs"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].table.as_deref(), Some("1st_quarter"));
    assert!(matches!(report.failures[0].error, Error::Format { .. }));
}

#[test]
fn test_single_file_with_serde_derives() {
    let fixture = Fixture::new();
    fixture.template("models.rs.tpl", MODEL_TEMPLATE);

    let tables = vec![
        Table::new("t_prices")
            .with_column(Column::new("id", "int").primary())
            .with_column(Column::new("amount", "double").nullable()),
    ];
    let report = fixture.run_with(
        &RustBinding,
        &tables,
        GenerateOptions {
            strategy: Strategy::SingleFile,
            prefix: "t_".into(),
            binding: BindingOptions { gen_json: true },
            ..GenerateOptions::default()
        },
    );

    assert!(report.is_success(), "failures: {:?}", report.failures);
    insta::assert_snapshot!(fixture.read("models.rs"), @r"
    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    pub struct Prices {
        pub id: i32,
        pub amount: Option<f64>,
    }
    ");
}
