//! C++ language binding for revgen.
//!
//! There is no formatter; output is written as rendered.

mod binding;
mod naming;
mod type_mapper;

pub use binding::CppBinding;
pub use naming::CPP_NAMING;
pub use type_mapper::CppTypeMapper;
