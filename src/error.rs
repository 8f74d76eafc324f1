// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything the library can fail with.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw table is missing a column, a row is ragged, or the file is empty.
    #[error("{table} table: {message}")]
    Shape { table: String, message: String },

    /// A label that must parse (date, points) did not.
    #[error("Wrong format: {0}")]
    Format(String),

    /// Rejected before any row is touched.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn shape(table: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Shape { table: table.into(), message: message.into() }
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::Io { path: path.to_path_buf(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
