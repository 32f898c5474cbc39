//! The formatting pass.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use crate::{FormatError, Formatter};

/// Result of passing rendered text through the formatting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub content: String,
    /// Whether a formatter actually ran.
    pub formatted: bool,
}

/// Run `text` through `formatter`, or return it untouched when there is none.
pub fn apply(formatter: Option<Formatter>, text: String) -> Result<Formatted, FormatError> {
    match formatter {
        Some(f) => Ok(Formatted {
            content: f(&text)?,
            formatted: true,
        }),
        None => Ok(Formatted {
            content: text,
            formatted: false,
        }),
    }
}

/// Pipe `text` through an external program and return its stdout.
///
/// A non-zero exit status fails with the program's stderr.
pub fn pipe_through(program: &str, args: &[&str], text: &str) -> Result<String, FormatError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| FormatError::new(format!("failed to run {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| FormatError::new(format!("failed to write to {}: {}", program, e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| FormatError::new(format!("failed to wait for {}: {}", program, e)))?;

    if output.status.success() {
        String::from_utf8(output.stdout)
            .map_err(|e| FormatError::new(format!("{} produced invalid UTF-8: {}", program, e)))
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(FormatError::new(stderr.trim().to_string()))
    }
}
