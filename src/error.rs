use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a precedence table, loading configuration or
/// listing a directory. Matching itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern for rule `{label}`: {source}")]
    InvalidPattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
