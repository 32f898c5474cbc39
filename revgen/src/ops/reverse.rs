//! Reverse a schema snapshot into source files.

use std::path::{Component, Path, PathBuf};

use eyre::{Context, Result};
use revgen_codegen::{GenerateOptions, Generator, Strategy};
use revgen_schema::{Schema, TableFilter};

use super::Resolved;
use crate::reports::ReverseReport;

/// Output directory, and package name, used when none is given.
pub const DEFAULT_MODEL: &str = "model";

/// Inputs of a reverse run besides the template directory config.
#[derive(Debug, Clone)]
pub struct ReverseOptions {
    pub schema: PathBuf,
    pub template_dir: PathBuf,
    /// Defaults to `./model`.
    pub output_dir: Option<PathBuf>,
    /// Regular expression selecting tables by raw name.
    pub filter: Option<String>,
    pub strategy: Strategy,
    pub format: bool,
    pub dry_run: bool,
}

/// Render every template in `options.template_dir` against the schema.
///
/// Errors returned here abort the run. Per-file failures are collected in
/// the report instead.
pub fn reverse(resolved: &Resolved, options: &ReverseOptions) -> Result<ReverseReport> {
    let filter = match options.filter.as_deref() {
        Some(pattern) => Some(
            TableFilter::new(pattern)
                .wrap_err_with(|| format!("invalid table filter '{}'", pattern))?,
        ),
        None => None,
    };

    let schema = Schema::from_path(&options.schema)?;
    let driver = schema.driver.clone();
    let tables = schema.into_filtered(filter.as_ref());
    if tables.is_empty() {
        tracing::warn!(filter = options.filter.as_deref().unwrap_or_default(), "no tables matched");
    }

    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL));
    let model = model_name(&output_dir);

    let generator = Generator::new(
        resolved.support.binding(),
        &tables,
        GenerateOptions {
            strategy: options.strategy,
            prefix: resolved.config.prefix.clone(),
            model: model.clone(),
            binding: resolved.binding_options(),
            format: options.format,
            dry_run: options.dry_run,
        },
    );
    let result = generator
        .generate(&options.template_dir, &output_dir)
        .wrap_err("generation aborted")?;

    Ok(ReverseReport {
        language: resolved.support.language(),
        driver,
        template_dir: options.template_dir.clone(),
        output_dir,
        model,
        tables: tables.iter().map(|t| t.name.clone()).collect(),
        result,
    })
}

/// Last normal component of `output_dir`, resolved against the current
/// directory so that `.` names the directory it stands for.
pub fn model_name(output_dir: &Path) -> String {
    let absolute = std::path::absolute(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());
    absolute
        .components()
        .rev()
        .find_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}
