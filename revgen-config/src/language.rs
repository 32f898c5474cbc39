//! Target languages for code generation.

use std::{fmt, str::FromStr};

/// Target languages with a registered binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Go
    #[default]
    Go,
    /// Rust
    Rust,
    /// C++
    Cpp,
}

impl Language {
    /// Every supported language, in registry order.
    pub const ALL: [Language; 3] = [Language::Go, Language::Rust, Language::Cpp];

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Cpp => "cpp",
        }
    }

    /// Comma separated identifiers, for diagnostics.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(Language::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "go" | "golang" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            "cpp" | "c++" | "cxx" => Ok(Language::Cpp),
            _ => Err(format!(
                "unknown language '{}', expected one of: {}",
                s,
                Self::supported_list()
            )),
        }
    }
}
