//! Parsing of the template directory `config` file.

use std::{path::Path, str::FromStr};

use miette::SourceSpan;

use crate::{Error, Language, Result, SourceContext};

/// Name of the configuration file inside a template directory.
pub const CONFIG_FILE_NAME: &str = "config";

/// Settings read from a template directory's `config` file.
#[derive(Debug, Clone, Default)]
pub struct TemplateConfig {
    /// Raw `lang` value, if set.
    pub lang: Option<String>,
    /// Emit JSON tags/derives alongside the ORM ones.
    pub gen_json: bool,
    /// Prefix stripped from table names before templates see them.
    pub prefix: String,
    lang_span: Option<SourceSpan>,
    source: Option<SourceContext>,
}

impl TemplateConfig {
    /// Read `<template_dir>/config`, or return defaults when it does not
    /// exist.
    pub fn load(template_dir: &Path) -> Result<Self> {
        let path = template_dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            parse_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the target language. Defaults to Go when `lang` is unset.
    pub fn language(&self) -> Result<Language> {
        let Some(lang) = &self.lang else {
            return Ok(Language::default());
        };

        Language::from_str(lang).map_err(|_| match (&self.source, self.lang_span) {
            (Some(ctx), Some(span)) => ctx.unsupported_language_error(lang, span),
            _ => Error::unsupported_language(lang),
        })
    }

    /// Override the language, e.g. from a command line flag.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self.lang_span = None;
        self
    }

    /// Override the table prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Parse a `config` file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<TemplateConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_str_with_filename(&content, &path.display().to_string())
}

/// Parse `config` content (uses "config" as the filename in diagnostics)
pub fn parse_str(content: &str) -> Result<TemplateConfig> {
    parse_str_with_filename(content, CONFIG_FILE_NAME)
}

fn parse_str_with_filename(content: &str, filename: &str) -> Result<TemplateConfig> {
    let ctx = SourceContext::new(content, filename);
    let mut config = TemplateConfig::default();

    let mut line_start = 0;
    for (number, raw_line) in content.split('\n').enumerate() {
        let offset = line_start;
        line_start += raw_line.len() + 1;

        let line = raw_line.trim_end_matches('\r');
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, rest)) = line.split_once('=') else {
            tracing::warn!(file = filename, line = number + 1, "ignoring line without '='");
            continue;
        };

        let key = key.trim();
        let value = rest.trim();
        let value_offset = offset + key_len(line, rest) + (rest.len() - rest.trim_start().len());
        let span = SourceSpan::from((value_offset, value.len()));

        match key {
            "lang" => {
                config.lang = Some(value.to_string());
                config.lang_span = Some(span);
            }
            "genJson" => {
                config.gen_json =
                    parse_bool(value).ok_or_else(|| ctx.invalid_bool_error(key, value, span))?;
            }
            "prefix" => config.prefix = value.to_string(),
            _ => {
                tracing::warn!(file = filename, line = number + 1, key, "ignoring unknown key");
            }
        }
    }

    config.source = Some(ctx);
    Ok(config)
}

/// Byte length of `line` up to and including the `=` that precedes `rest`.
fn key_len(line: &str, rest: &str) -> usize {
    line.len() - rest.len()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_all_keys() {
        let config = parse_str("lang = rust\ngenJson = true\nprefix = t_\n").unwrap();
        assert_eq!(config.lang.as_deref(), Some("rust"));
        assert!(config.gen_json);
        assert_eq!(config.prefix, "t_");
        assert_eq!(config.language().unwrap(), Language::Rust);
    }

    #[test]
    fn test_defaults() {
        let config = parse_str("").unwrap();
        assert_eq!(config.lang, None);
        assert!(!config.gen_json);
        assert_eq!(config.prefix, "");
        assert_eq!(config.language().unwrap(), Language::Go);
    }

    #[test]
    fn test_comments_crlf_and_junk_lines_are_ignored() {
        let config = parse_str("# generated\r\nlang=go\r\nnot a setting\r\ncolor = blue\r\n")
            .unwrap();
        assert_eq!(config.lang.as_deref(), Some("go"));
        assert!(!config.gen_json);
    }

    #[test]
    fn test_gen_json_accepts_go_style_bools() {
        assert!(parse_str("genJson = 1").unwrap().gen_json);
        assert!(parse_str("genJson = T").unwrap().gen_json);
        assert!(!parse_str("genJson = False").unwrap().gen_json);
    }

    #[test]
    fn test_invalid_gen_json_points_at_value() {
        let content = "lang = go\ngenJson = yes\n";
        let err = parse_str(content).unwrap_err();
        match *err {
            Error::InvalidBool {
                span, key, value, ..
            } => {
                assert_eq!(key, "genJson");
                assert_eq!(value, "yes");
                assert_eq!(&content[span.offset()..span.offset() + span.len()], "yes");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_language() {
        let content = "lang = objc\n";
        let config = parse_str(content).unwrap();
        let err = config.language().unwrap_err();
        assert!(err.is_unsupported_language());
        match *err {
            Error::UnsupportedLanguageAt { span, .. } => {
                assert_eq!(&content[span.offset()..span.offset() + span.len()], "objc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_overrides() {
        let config = parse_str("lang = objc\nprefix = t_")
            .unwrap()
            .with_lang("cpp")
            .with_prefix("");
        assert_eq!(config.language().unwrap(), Language::Cpp);
        assert_eq!(config.prefix, "");
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = TemplateConfig::load(temp.path()).unwrap();
        assert_eq!(config.language().unwrap(), Language::Go);
    }

    #[test]
    fn test_load_reads_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "lang = c++\nprefix = app_\n").unwrap();

        let config = TemplateConfig::load(temp.path()).unwrap();
        assert_eq!(config.language().unwrap(), Language::Cpp);
        assert_eq!(config.prefix, "app_");
    }
}
