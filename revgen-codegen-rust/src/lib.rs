//! Rust language binding for revgen.
//!
//! Maps SQL types to Rust types (`chrono`, `rust_decimal`, `uuid` and
//! `serde_json` for the non-primitive ones), synthesizes the matching `use`
//! imports and formats output with `prettyplease`.

mod binding;
mod format;
mod naming;
mod type_mapper;

pub use binding::RustBinding;
pub use format::format_rust;
pub use naming::RUST_NAMING;
pub use type_mapper::RustTypeMapper;
