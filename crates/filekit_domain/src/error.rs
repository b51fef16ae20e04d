use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for file handle operations.
///
/// Every variant keeps the path the failing call was made against. Host
/// errors are carried as `source` unchanged so callers can inspect the
/// original `io::Error`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File already exists: {}", path.display())]
    AlreadyExists {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("{} is not a regular file", path.display())]
    NotRegularFile { path: PathBuf },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classifies a host error raised while performing `action` on `path`.
    pub fn from_io(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path, source },
            io::ErrorKind::AlreadyExists => Error::AlreadyExists { path, source: Some(source) },
            _ => Error::Io { action, path, source },
        }
    }

    /// The path the failing operation was targeting.
    pub fn path(&self) -> &Path {
        match self {
            Error::NotFound { path, .. }
            | Error::AlreadyExists { path, .. }
            | Error::NotRegularFile { path }
            | Error::Io { path, .. } => path,
        }
    }

    /// The underlying host error, when there is one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::NotFound { source, .. } | Error::Io { source, .. } => Some(source),
            Error::AlreadyExists { source, .. } => source.as_ref(),
            Error::NotRegularFile { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExists { .. })
    }
}

pub type Result<A> = std::result::Result<A, Error>;
