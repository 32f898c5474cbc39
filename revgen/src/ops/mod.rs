//! Core operations.
//!
//! This module contains the business logic for revgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod languages;
pub mod reverse;

use std::path::Path;

use revgen_codegen::BindingOptions;
use revgen_config::TemplateConfig;

pub use check::check;
pub use languages::languages;
pub use reverse::{ReverseOptions, reverse};

use crate::language::LanguageSupport;

/// Template directory settings with command line overrides applied and the
/// language resolved.
pub struct Resolved {
    pub config: TemplateConfig,
    pub support: LanguageSupport,
}

impl Resolved {
    pub fn binding_options(&self) -> BindingOptions {
        BindingOptions {
            gen_json: self.config.gen_json,
        }
    }
}

/// Load `<template_dir>/config`, apply overrides and resolve the language.
///
/// Touches nothing on disk, so an unsupported language aborts a run before
/// any output directory exists.
pub fn resolve(
    template_dir: &Path,
    lang: Option<&str>,
    prefix: Option<&str>,
) -> revgen_config::Result<Resolved> {
    let mut config = TemplateConfig::load(template_dir)?;
    if let Some(lang) = lang {
        config = config.with_lang(lang);
    }
    if let Some(prefix) = prefix {
        config = config.with_prefix(prefix);
    }

    let language = config.language()?;
    tracing::debug!(%language, prefix = %config.prefix, gen_json = config.gen_json, "resolved template config");

    Ok(Resolved {
        config,
        support: LanguageSupport::get(language),
    })
}
