//! Result of a generation run.

use std::path::PathBuf;

use crate::Error;

/// One output file produced (or previewed) by a run.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    /// Template file name the output came from.
    pub template: String,
    /// Display name of the table, in multi-file mode.
    pub table: Option<String>,
    pub path: PathBuf,
    /// Whether the binding's formatter ran.
    pub formatted: bool,
    /// Output text, kept only for dry runs.
    pub content: Option<String>,
}

/// One output file that could not be produced.
#[derive(Debug)]
pub struct Failure {
    pub template: String,
    pub table: Option<String>,
    pub error: Error,
}

impl Failure {
    /// `template` or `template [table]`, for messages.
    pub fn target(&self) -> String {
        match &self.table {
            Some(table) => format!("{} [{}]", self.template, table),
            None => self.template.clone(),
        }
    }
}

/// Outputs and failures of a [`Generator`](crate::Generator) run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub outputs: Vec<RenderedFile>,
    pub failures: Vec<Failure>,
    /// Number of templates processed.
    pub templates: usize,
    pub dry_run: bool,
}

impl GenerateReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Whether every output was produced.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Outputs produced from `template`.
    pub fn outputs_for<'a>(&'a self, template: &'a str) -> impl Iterator<Item = &'a RenderedFile> {
        self.outputs.iter().filter(move |o| o.template == template)
    }

    pub(crate) fn fail(&mut self, template: &str, table: Option<&str>, error: Error) {
        tracing::error!(
            template,
            table = table.unwrap_or_default(),
            error = %error.chain(),
            "generation failed"
        );
        self.failures.push(Failure {
            template: template.to_string(),
            table: table.map(str::to_string),
            error,
        });
    }
}
