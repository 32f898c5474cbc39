//! Language-specific abstractions.
//!
//! This module provides traits and types for language bindings:
//! - [`LanguageBinding`] - Helpers, imports and formatter for one language
//! - [`TypeMapper`] - Trait for mapping SQL type kinds to language types
//! - [`Helpers`] - Named template helpers
//! - [`NamingConvention`] - Language-specific naming rules

mod helpers;
mod naming;
mod traits;

pub use helpers::{Args, HelperError, HelperFn, Helpers};
pub use naming::NamingConvention;
pub use traits::{BindingOptions, Formatter, LanguageBinding, TypeMapper};
