//! Core utilities and types for revgen.
//!
//! This crate provides the string helpers and file primitives shared by
//! the schema, codegen and language crates.

mod file;
mod utils;

// File operations
pub use file::{File, write_file};
// String utilities
pub use utils::{
    pluralize, singularize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
    untitle,
};
