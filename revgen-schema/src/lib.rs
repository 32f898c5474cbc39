//! Schema model for revgen.
//!
//! These types describe what a database introspection step found: tables,
//! their columns and the driver metadata attached to them. The codegen
//! pipeline reads them and hands them to templates; it never interprets the
//! driver metadata itself.
//!
//! # Architecture
//!
//! ```text
//! database → snapshot (.json/.toml) → Schema → filter → codegen
//! ```

mod error;
mod filter;
mod load;
mod sql_type;
mod table;

pub use error::{Error, Result};
pub use filter::TableFilter;
pub use load::Schema;
pub use sql_type::{SqlType, TypeKind};
pub use table::{Column, Index, IndexKind, Table, strip_prefix};
