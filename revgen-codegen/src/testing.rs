//! Test utilities for language bindings.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use revgen_core::{to_pascal_case, to_snake_case};
use revgen_schema::{Column, Index, IndexKind, Table};
use tempfile::TempDir;

use crate::{
    Args, BindingOptions, FormatError, Formatter, GenerateOptions, GenerateReport, Generator,
    HelperError, Helpers, ImportMap, LanguageBinding, NamingConvention,
};

/// Text that makes [`StubBinding`]'s formatter fail.
pub const FORMAT_FAILURE_MARKER: &str = "@@unformattable@@";

/// `users(id, name)` and `orders(id, user_id, created_at)`.
pub fn users_and_orders() -> Vec<Table> {
    vec![
        Table::new("users")
            .with_column(Column::new("id", "bigint").primary())
            .with_column(Column::new("name", "varchar(64)")),
        Table::new("orders")
            .with_column(Column::new("id", "bigint").primary())
            .with_column(Column::new("user_id", "bigint"))
            .with_column(Column::new("created_at", "datetime").nullable())
            .with_index(Index::new("idx_user", IndexKind::Index, &["user_id"])),
    ]
}

/// Binding used to exercise the pipeline without a real language.
///
/// - helpers: the common set, naming helpers, `shout` (appends `!` when
///   `gen_json` is on) and `fail` (always errors)
/// - imports: one `<table> = stub/<table>` entry per raw table name
/// - formatter: uppercases, failing on [`FORMAT_FAILURE_MARKER`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StubBinding;

impl LanguageBinding for StubBinding {
    fn language(&self) -> &'static str {
        "stub"
    }

    fn naming(&self) -> NamingConvention {
        NamingConvention {
            table_to_type: to_pascal_case,
            column_to_field: to_snake_case,
            reserved_words: &["type"],
            escape_reserved: |name| format!("{name}_"),
        }
    }

    fn helpers(&self, options: &BindingOptions) -> Helpers {
        let mut helpers = Helpers::common();
        self.naming().register(&mut helpers);
        let gen_json = options.gen_json;
        helpers.add("shout", move |args: &Args<'_>| {
            let text = args.str(0)?.to_uppercase();
            if gen_json {
                Ok(format!("{text}!"))
            } else {
                Ok(text)
            }
        });
        helpers.add("fail", |_: &Args<'_>| Err(HelperError::new("always fails")));
        helpers
    }

    fn imports(&self, tables: &[&Table]) -> ImportMap {
        tables
            .iter()
            .map(|t| (t.name.as_str(), format!("stub/{}", t.name)))
            .collect()
    }

    fn formatter(&self) -> Option<Formatter> {
        Some(shout_format)
    }
}

fn shout_format(source: &str) -> Result<String, FormatError> {
    if source.contains(FORMAT_FAILURE_MARKER) {
        Err(FormatError::new("found unformattable marker"))
    } else {
        Ok(source.to_uppercase())
    }
}

/// A template directory and an output directory in a temporary root.
pub struct Fixture {
    root: TempDir,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(root.path().join("templates")).expect("failed to create template dir");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn template_dir(&self) -> PathBuf {
        self.root().join("templates")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("out")
    }

    /// Write a template (or `config`) relative to the template directory.
    pub fn template(&self, relative: &str, content: &str) {
        let path = self.template_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create template subdir");
        }
        fs::write(path, content).expect("failed to write template");
    }

    /// Run the generator with [`StubBinding`].
    pub fn run(&self, tables: &[Table], options: GenerateOptions) -> GenerateReport {
        self.run_with(&StubBinding, tables, options)
    }

    /// Run the generator with `binding`.
    pub fn run_with(
        &self,
        binding: &dyn LanguageBinding,
        tables: &[Table],
        options: GenerateOptions,
    ) -> GenerateReport {
        Generator::new(binding, tables, options)
            .generate(&self.template_dir(), &self.output_dir())
            .expect("generation aborted")
    }

    /// Read an output file.
    pub fn read(&self, name: &str) -> String {
        let path = self.output_dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
    }

    /// Sorted names of the files in the output directory.
    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.output_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
