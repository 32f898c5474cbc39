//! Errors raised while generating code.

use std::{error::Error as StdError, io, path::PathBuf};

use thiserror::Error;

/// Failure reported by a language formatter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from the generation pipeline.
///
/// `TemplateDirMissing`, `CreateOutputDir` and `Walk` abort a run. The other
/// variants are recorded per output file and the run continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("template directory '{}' does not exist", path.display())]
    TemplateDirMissing { path: PathBuf },

    #[error("failed to create output directory '{}'", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk template directory")]
    Walk {
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read template '{}'", path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compile template '{template}'")]
    Compile {
        template: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("template '{template}' calls unknown helper '{helper}'")]
    UnknownHelper { template: String, helper: String },

    #[error("failed to render template '{template}'")]
    Render {
        template: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("failed to format '{}'", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("table '{table}' has no usable output name: {reason}")]
    InvalidOutputName { table: String, reason: &'static str },

    #[error("'{}' was already produced from another table", path.display())]
    DuplicateOutput { path: PathBuf },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The error message followed by every source in the chain, joined by
    /// `": "`.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = StdError::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    /// Whether the error stops the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TemplateDirMissing { .. } | Error::CreateOutputDir { .. } | Error::Walk { .. }
        )
    }
}
