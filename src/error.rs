// src/error.rs
//! Crate-wide error type.
//!
//! Every failure aborts the run; variants only exist so the message can
//! name the file, line, section or option that was wrong.

use std::path::{Path, PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file {path}: {source}")]
    ConfigSyntax {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{section} {period} \"{key}\": field \"{field}\" is not a number ({value:?})")]
    BadNumber {
        section: String,
        period: String,
        key: String,
        field: String,
        value: String,
    },

    #[error("{section} {period} \"{key}\": missing field \"{field}\"")]
    MissingField {
        section: String,
        period: String,
        key: String,
        field: String,
    },

    #[error("Invalid period: {0:?} (expected YYYYMM)")]
    BadPeriod(String),

    #[error("Could not encode JSON for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not set up logging: {0}")]
    Logging(String),
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io { path: path.as_ref().to_path_buf(), source }
    }

    pub fn parse(path: impl AsRef<Path>, line: usize, message: impl Into<String>) -> Self {
        Error::Parse { path: path.as_ref().to_path_buf(), line, message: message.into() }
    }
}

/// Attach a path to an `io::Result`.
pub trait IoContext<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| Error::io(path, e))
    }
}
