//! Go language binding for revgen.
//!
//! Generates [xorm](https://xorm.io) flavored models: `type` maps SQL types
//! to Go types, `tag` renders the struct tag, and output is run through
//! `gofmt`.

mod binding;
mod format;
mod naming;
mod tag;
mod type_mapper;

pub use binding::GoBinding;
pub use format::format_go;
pub use naming::GO_NAMING;
pub use tag::xorm_tag;
pub use type_mapper::GoTypeMapper;
