//! The generation pipeline.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use revgen_core::File;
use revgen_schema::Table;

use crate::{
    BindingOptions, Error, GenerateReport, LanguageBinding, Plan, RenderContext, RenderedFile,
    Strategy,
    format::{self, Formatted},
    render::TemplateRenderer,
    walker::{self, TemplateFile},
};

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Strategy for every template except `protobuf.proto.tpl`.
    pub strategy: Strategy,
    /// Removed from table names before templates see them.
    pub prefix: String,
    /// Exposed to templates as `model`.
    pub model: String,
    pub binding: BindingOptions,
    /// Run-wide switch for the formatting pass.
    pub format: bool,
    /// Render and format, but do not touch the filesystem.
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            prefix: String::new(),
            model: "model".to_string(),
            binding: BindingOptions::default(),
            format: true,
            dry_run: false,
        }
    }
}

/// Renders a template directory against a list of tables.
///
/// Per-file failures are collected in the [`GenerateReport`] and never stop
/// the run; only the errors returned from [`Generator::generate`] do.
pub struct Generator<'a> {
    binding: &'a dyn LanguageBinding,
    tables: &'a [Table],
    options: GenerateOptions,
}

/// The (template, table subset) pair one output file is rendered for.
struct Target<'t> {
    template: &'t TemplateFile,
    tables: Vec<&'t Table>,
    table: Option<&'t str>,
    path: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new(
        binding: &'a dyn LanguageBinding,
        tables: &'a [Table],
        options: GenerateOptions,
    ) -> Self {
        Self {
            binding,
            tables,
            options,
        }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Render every template under `template_dir` into `output_dir`.
    pub fn generate(&self, template_dir: &Path, output_dir: &Path) -> Result<GenerateReport, Error> {
        if !template_dir.is_dir() {
            return Err(Error::TemplateDirMissing {
                path: template_dir.to_path_buf(),
            });
        }

        let templates = walker::walk(template_dir, self.options.strategy)?;

        if !self.options.dry_run {
            std::fs::create_dir_all(output_dir).map_err(|source| Error::CreateOutputDir {
                path: output_dir.to_path_buf(),
                source,
            })?;
        }

        tracing::debug!(
            language = self.binding.language(),
            templates = templates.len(),
            tables = self.tables.len(),
            strategy = %self.options.strategy,
            "generating"
        );

        let mut report = GenerateReport::new(self.options.dry_run);
        let mut claimed = HashSet::new();
        for template in &templates {
            self.generate_template(template, output_dir, &mut claimed, &mut report);
        }
        Ok(report)
    }

    fn generate_template(
        &self,
        template: &TemplateFile,
        output_dir: &Path,
        claimed: &mut HashSet<PathBuf>,
        report: &mut GenerateReport,
    ) {
        report.templates += 1;
        tracing::debug!(template = %template.file_name, plan = ?template.plan, "rendering template");

        let renderer = match self.compile(template) {
            Ok(renderer) => renderer,
            Err(error) => {
                report.fail(&template.file_name, None, error);
                return;
            }
        };

        let name = template.name();
        match template.plan.strategy {
            Strategy::MultiFile => {
                for table in self.tables {
                    let display = table.display_name(&self.options.prefix);
                    if let Err(reason) = check_output_name(display) {
                        let error = Error::InvalidOutputName {
                            table: table.name.clone(),
                            reason,
                        };
                        report.fail(&template.file_name, Some(&table.name), error);
                        continue;
                    }
                    let target = Target {
                        template,
                        tables: vec![table],
                        table: Some(display),
                        path: output_dir.join(name.table_output(display)),
                    };
                    self.emit(&renderer, target, claimed, report);
                }
            }
            Strategy::SingleFile => {
                let target = Target {
                    template,
                    tables: self.tables.iter().collect(),
                    table: None,
                    path: output_dir.join(name.single_output()),
                };
                self.emit(&renderer, target, claimed, report);
            }
        }
    }

    fn compile(&self, template: &TemplateFile) -> Result<TemplateRenderer, Error> {
        let text = std::fs::read_to_string(&template.path).map_err(|source| Error::ReadTemplate {
            path: template.path.clone(),
            source,
        })?;
        TemplateRenderer::compile(
            &template.file_name,
            &text,
            self.binding,
            &self.options.binding,
        )
    }

    fn emit(
        &self,
        renderer: &TemplateRenderer,
        target: Target<'_>,
        claimed: &mut HashSet<PathBuf>,
        report: &mut GenerateReport,
    ) {
        let template = &target.template.file_name;
        if !claimed.insert(target.path.clone()) {
            let error = Error::DuplicateOutput { path: target.path };
            report.fail(template, target.table, error);
            return;
        }
        let output = self
            .produce(renderer, &target.tables, target.template.plan, &target.path)
            .and_then(|formatted| self.write(&target.path, formatted));

        match output {
            Ok((formatted, content)) => {
                tracing::debug!(path = %target.path.display(), formatted, "generated");
                report.outputs.push(RenderedFile {
                    template: template.clone(),
                    table: target.table.map(str::to_string),
                    path: target.path,
                    formatted,
                    content,
                });
            }
            Err(error) => report.fail(template, target.table, error),
        }
    }

    fn produce(
        &self,
        renderer: &TemplateRenderer,
        tables: &[&Table],
        plan: Plan,
        path: &Path,
    ) -> Result<Formatted, Error> {
        let imports = self.binding.imports(tables);
        let context = RenderContext::new(tables, &self.options.prefix, imports, &self.options.model);
        let rendered = renderer.render(&context)?;

        let formatter = if plan.format && self.options.format {
            self.binding.formatter()
        } else {
            None
        };

        format::apply(formatter, rendered).map_err(|source| Error::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the output, or keep it in the report on a dry run.
    fn write(&self, path: &Path, output: Formatted) -> Result<(bool, Option<String>), Error> {
        if self.options.dry_run {
            return Ok((output.formatted, Some(output.content)));
        }

        File::new(path, output.content)
            .write()
            .map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
        Ok((output.formatted, None))
    }
}

/// A table's display name must name a single file inside the output
/// directory.
fn check_output_name(display: &str) -> Result<(), &'static str> {
    if display.is_empty() {
        Err("the name is empty once the prefix is removed")
    } else if display.contains(['/', '\\']) {
        Err("the name contains a path separator")
    } else if display == "." || display == ".." {
        Err("the name is a relative directory")
    } else {
        Ok(())
    }
}
