//! gofmt integration.

use revgen_codegen::{FormatError, format::pipe_through};

/// Format Go source with `gofmt`.
///
/// Syntax errors reported by gofmt fail the output file.
pub fn format_go(source: &str) -> Result<String, FormatError> {
    pipe_through("gofmt", &[], source)
}
