//! Data handed to templates.

mod context;
mod imports;

pub use context::{ColumnParam, ColumnView, IndexRef, RenderContext, TableView};
pub use imports::ImportMap;
