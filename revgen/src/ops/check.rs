//! Validate a template directory without a schema.

use std::path::Path;

use eyre::{Result, bail};
use revgen_codegen::{Strategy, TemplateRenderer, walker};

use super::Resolved;
use crate::reports::{CheckReport, TemplateCheck};

/// Compile every template under `template_dir` with the resolved binding's
/// helpers.
///
/// A clean check means every template parses and only calls helpers the
/// binding provides.
pub fn check(template_dir: &Path, resolved: &Resolved, strategy: Strategy) -> Result<CheckReport> {
    if !template_dir.is_dir() {
        bail!("template directory '{}' does not exist", template_dir.display());
    }

    let binding = resolved.support.binding();
    let options = resolved.binding_options();

    let templates = walker::walk(template_dir, strategy)?
        .into_iter()
        .map(|template| {
            let error = std::fs::read_to_string(&template.path)
                .map_err(|e| e.to_string())
                .and_then(|text| {
                    TemplateRenderer::compile(&template.file_name, &text, binding, &options)
                        .map(|_| ())
                        .map_err(|e| e.chain())
                })
                .err();

            let name = template.name();
            let output = match template.plan.strategy {
                Strategy::MultiFile => name.table_output("<table>"),
                Strategy::SingleFile => name.single_output().to_string(),
            };

            TemplateCheck {
                file_name: template.file_name,
                output,
                plan: template.plan,
                error,
            }
        })
        .collect();

    Ok(CheckReport {
        template_dir: template_dir.to_path_buf(),
        language: resolved.support.language(),
        prefix: resolved.config.prefix.clone(),
        gen_json: resolved.config.gen_json,
        templates,
    })
}
