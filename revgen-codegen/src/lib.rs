//! Template-driven code generation for revgen.
//!
//! This crate turns a list of [`Table`](revgen_schema::Table)s and a
//! directory of templates into generated source files. Language-specific
//! behavior (template helpers, import synthesis, formatting) is supplied by a
//! [`LanguageBinding`] implemented in the `revgen-codegen-*` crates.
//!
//! # Module Organization
//!
//! - [`language`] - The `LanguageBinding` trait, helpers and naming conventions
//! - [`generation`] - Render context and import maps handed to templates
//! - [`render`] - Template compilation and execution
//! - [`strategy`] - Single-file vs multi-file output and output naming
//! - [`format`] - The optional formatting pass
//! - [`walker`] - Template directory traversal
//! - [`generator`] - The pipeline tying the above together
//! - [`testing`] - Test utilities (feature-gated)

pub mod error;
pub mod format;
pub mod generation;
pub mod generator;
pub mod language;
pub mod render;
pub mod report;
pub mod strategy;
pub mod walker;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, FormatError};
pub use format::Formatted;
pub use generation::{ColumnParam, ImportMap, IndexRef, RenderContext};
pub use generator::{GenerateOptions, Generator};
pub use language::{
    Args, BindingOptions, Formatter, HelperError, Helpers, LanguageBinding, NamingConvention,
    TypeMapper,
};
pub use render::TemplateRenderer;
pub use report::{Failure, GenerateReport, RenderedFile};
pub use strategy::{PROTOBUF_TEMPLATE, Plan, Strategy, TemplateName};
pub use walker::TemplateFile;
