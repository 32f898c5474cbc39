use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so that error factories
/// only need the span.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create an invalid boolean error pointing at the offending value.
    pub fn invalid_bool_error(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidBool {
            src: self.named_source(),
            span: span.into(),
            key: key.into(),
            value: value.into(),
        })
    }

    /// Create an unsupported language error pointing at the `lang` value.
    pub fn unsupported_language_error(
        &self,
        name: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnsupportedLanguageAt {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            supported: crate::Language::supported_list(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(revgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value '{value}' for '{key}'")]
    #[diagnostic(
        code(revgen::invalid_bool),
        help("'{key}' expects a boolean: true, false, 1 or 0")
    )]
    InvalidBool {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a boolean")]
        span: SourceSpan,
        key: String,
        value: String,
    },

    #[error("unsupported language '{name}'")]
    #[diagnostic(
        code(revgen::unsupported_language),
        help("supported languages are: {supported}")
    )]
    UnsupportedLanguage { name: String, supported: String },

    #[error("unsupported language '{name}'")]
    #[diagnostic(
        code(revgen::unsupported_language),
        help("supported languages are: {supported}")
    )]
    UnsupportedLanguageAt {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown language")]
        span: SourceSpan,
        name: String,
        supported: String,
    },
}

impl Error {
    /// Create an unsupported language error without source context
    pub fn unsupported_language(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnsupportedLanguage {
            name: name.into(),
            supported: crate::Language::supported_list(),
        })
    }

    /// Whether this error reports an unknown language identifier.
    pub fn is_unsupported_language(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedLanguage { .. } | Error::UnsupportedLanguageAt { .. }
        )
    }
}
