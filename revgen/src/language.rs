//! Unified language dispatch.
//!
//! Maps each [`Language`] to its statically registered binding.

use std::str::FromStr;

use revgen_codegen::LanguageBinding;
use revgen_codegen_cpp::CppBinding;
use revgen_codegen_go::GoBinding;
use revgen_codegen_rust::RustBinding;
use revgen_config::{Error, Language};

/// Language-specific support for code generation.
pub struct LanguageSupport {
    language: Language,
    binding: &'static dyn LanguageBinding,
    /// Name of the formatter applied to output, if any.
    pub formatter: Option<&'static str>,
    /// Alternative identifiers accepted for the language.
    pub aliases: &'static [&'static str],
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        match language {
            Language::Go => Self {
                language,
                binding: &GoBinding,
                formatter: Some("gofmt"),
                aliases: &["golang"],
            },
            Language::Rust => Self {
                language,
                binding: &RustBinding,
                formatter: Some("prettyplease"),
                aliases: &["rs"],
            },
            Language::Cpp => Self {
                language,
                binding: &CppBinding,
                formatter: None,
                aliases: &["c++", "cxx"],
            },
        }
    }

    /// Look up a language by identifier or alias.
    pub fn lookup(id: &str) -> revgen_config::Result<Self> {
        Language::from_str(id)
            .map(Self::get)
            .map_err(|_| Error::unsupported_language(id))
    }

    /// Every registered language.
    pub fn all() -> impl Iterator<Item = Self> {
        Language::ALL.into_iter().map(Self::get)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn binding(&self) -> &'static dyn LanguageBinding {
        self.binding
    }
}
