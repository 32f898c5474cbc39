use std::path::PathBuf;

use thiserror::Error;

/// Result type for schema loading
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read schema '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema '{path}' as JSON")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse schema '{path}' as TOML")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
