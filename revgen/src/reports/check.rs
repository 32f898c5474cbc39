use std::path::PathBuf;

use revgen_codegen::Plan;
use revgen_config::Language;

use super::{Output, Report, plural};

/// One template as seen by the check command.
pub struct TemplateCheck {
    pub file_name: String,
    /// Output name, with `<table>` standing in for the table in multi-file
    /// mode.
    pub output: String,
    pub plan: Plan,
    /// Compile error, if any.
    pub error: Option<String>,
}

/// Report for the check command.
pub struct CheckReport {
    pub template_dir: PathBuf,
    pub language: Language,
    pub prefix: String,
    pub gen_json: bool,
    pub templates: Vec<TemplateCheck>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.templates.iter().all(|t| t.error.is_none())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("language", self.language.as_str());
        if !self.prefix.is_empty() {
            out.key_value("prefix", &self.prefix);
        }
        out.key_value("genJson", &self.gen_json.to_string());
        out.newline();

        out.section(&plural(self.templates.len(), "template"));
        for template in &self.templates {
            let mut line = format!(
                "{} -> {} ({})",
                template.file_name, template.output, template.plan.strategy
            );
            if !template.plan.format {
                line.push_str(", unformatted");
            }
            out.list_item(&line);
        }

        for template in &self.templates {
            if let Some(error) = &template.error {
                out.error(error);
            }
        }

        if self.templates.is_empty() {
            out.warning("no templates found");
        }

        if self.is_valid() {
            out.newline();
            out.preformatted(&format!("✓ {} is valid", self.template_dir.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use revgen_codegen::Strategy;

    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            template_dir: PathBuf::from("templates"),
            language: Language::Go,
            prefix: "t_".to_string(),
            gen_json: false,
            templates: vec![TemplateCheck {
                file_name: "protobuf.proto.tpl".to_string(),
                output: "protobuf.proto".to_string(),
                plan: Plan::for_template("protobuf.proto.tpl", Strategy::MultiFile),
                error: None,
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        let text = out.text();
        assert!(text.contains("prefix: t_"));
        assert!(text.contains("  - protobuf.proto.tpl -> protobuf.proto (single-file), unformatted"));
        assert!(text.ends_with("✓ templates is valid"));
    }
}
