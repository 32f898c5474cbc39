use std::path::PathBuf;

use revgen_codegen::GenerateReport;
use revgen_config::Language;

use super::{Output, Report, plural};

/// Report for the reverse command.
pub struct ReverseReport {
    pub language: Language,
    /// Driver recorded in the schema snapshot, if any.
    pub driver: Option<String>,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    pub model: String,
    /// Raw names of the tables that passed the filter.
    pub tables: Vec<String>,
    pub result: GenerateReport,
}

impl ReverseReport {
    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }
}

impl Report for ReverseReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("language", self.language.as_str());
        if let Some(driver) = &self.driver {
            out.key_value("driver", driver);
        }
        out.key_value("templates", &self.template_dir.display().to_string());
        out.key_value("output", &self.output_dir.display().to_string());
        out.key_value("model", &self.model);
        out.key_value("tables", &self.tables.len().to_string());
        out.newline();

        if self.result.dry_run {
            for file in &self.result.outputs {
                out.divider(&file.path.display().to_string());
                out.preformatted(file.content.as_deref().unwrap_or_default());
            }
        } else if !self.result.outputs.is_empty() {
            out.section("Generated");
            for file in &self.result.outputs {
                let path = file.path.display().to_string();
                if file.formatted {
                    out.added_item(&path);
                } else {
                    out.added_item(&format!("{} (unformatted)", path));
                }
            }
        }

        for failure in &self.result.failures {
            out.error(&format!("{}: {}", failure.target(), failure.error.chain()));
        }

        if self.tables.is_empty() {
            out.warning("no tables matched");
        }

        out.newline();
        let verb = if self.result.dry_run { "previewed" } else { "generated" };
        let mut summary = format!(
            "{} {} from {}",
            plural(self.result.outputs.len(), "file"),
            verb,
            plural(self.result.templates, "template"),
        );
        if !self.is_success() {
            summary.push_str(&format!(", {} failed", self.result.failures.len()));
        }
        out.preformatted(&summary);
    }
}
