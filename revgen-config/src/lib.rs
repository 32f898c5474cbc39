// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Template directory configuration.
//!
//! A template directory may carry a `config` file next to its templates:
//!
//! ```text
//! lang = go
//! genJson = true
//! prefix = t_
//! ```

mod config;
mod error;
mod language;

pub use config::{CONFIG_FILE_NAME, TemplateConfig, parse_file, parse_str};
pub use error::{Error, Result, SourceContext};
pub use language::Language;
