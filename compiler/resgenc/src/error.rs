//! Failures of the driver itself, as opposed to diagnostics about the
//! analyzed sources.

use std::io;
use std::path::{Path, PathBuf};

use resgen_analysis::Cancelled;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("no C# source files found")]
    NoSources,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("{0} cannot be combined with {1}")]
    ConflictingOptions(&'static str, &'static str),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl DriverError {
    /// Classify an error from reading `path`.
    pub fn reading(path: &Path, error: io::Error) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Read {
                path,
                source: error,
            },
        }
    }

    pub fn writing(path: &Path, error: io::Error) -> Self {
        DriverError::Write {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
