//! Error taxonomy shared by every port and operation.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by file, directory, codec and command operations.
///
/// Every variant names the path, program or input that failed so the caller
/// can report it without extra context.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path does not exist, or is not the kind of entry the operation needs.
    #[error("not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The path exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// Path that was expected to be a directory.
        path: PathBuf,
    },

    /// Access to the path was refused.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// Path that could not be accessed.
        path: PathBuf,
    },

    /// Structured text could not be decoded.
    #[error("parse error: {reason}")]
    Parse {
        /// Decoder message.
        reason: String,
    },

    /// A structure that must be a mapping was something else.
    #[error("expected a mapping, got {found}")]
    NotAMapping {
        /// JSON type name of the value that was supplied.
        found: &'static str,
    },

    /// Any other I/O failure on a path.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// An external program could not be started.
    #[error("failed to run {program}: {source}")]
    Exec {
        /// Program that was spawned.
        program: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// An error reconstructed from a cassette.
    #[error("{message}")]
    Replayed {
        /// Recorded error kind.
        kind: ErrorKind,
        /// Recorded display message.
        message: String,
    },

    /// Recording or replay could not be set up or ran out of answers.
    #[error("cassette error: {0}")]
    Cassette(String),

    /// Startup settings are unusable.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Serializable classification of an [`Error`], used in cassettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`Error::NotFound`].
    NotFound,
    /// See [`Error::NotADirectory`].
    NotADirectory,
    /// See [`Error::PermissionDenied`].
    PermissionDenied,
    /// See [`Error::Parse`] and [`Error::NotAMapping`].
    Parse,
    /// Everything else.
    Other,
}

impl Error {
    /// Maps an I/O error on `path` onto the taxonomy.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NotADirectory { .. } => ErrorKind::NotADirectory,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::Parse { .. } | Self::NotAMapping { .. } => ErrorKind::Parse,
            Self::Exec { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorKind::NotFound
            }
            Self::Replayed { kind, .. } => *kind,
            Self::Io { .. } | Self::Exec { .. } | Self::Cassette(_) | Self::Config(_) => {
                ErrorKind::Other
            }
        }
    }
}
