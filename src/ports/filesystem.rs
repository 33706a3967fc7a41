//! Filesystem port for file and directory I/O.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Classification of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link, whatever it points at.
    Symlink,
    /// Sockets, fifos, devices.
    Other,
}

/// Provides filesystem access for reading, writing and listing.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if the path does not
    /// exist or is not a regular file, and
    /// [`Error::PermissionDenied`](crate::Error::PermissionDenied) if it
    /// cannot be opened.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// Parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the parent directory is missing and
    /// `PermissionDenied` when the write is refused.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Returns `true` unless the path is known not to exist.
    ///
    /// A path that cannot be inspected (for example behind an unsearchable
    /// directory) counts as existing.
    ///
    /// # Errors
    ///
    /// Live adapters never fail; replaying adapters fail when the cassette
    /// has no answer.
    fn exists(&self, path: &Path) -> Result<bool>;

    /// Returns `true` if the path is a directory, following symlinks.
    ///
    /// # Errors
    ///
    /// Same as [`exists`](Self::exists).
    fn is_dir(&self, path: &Path) -> Result<bool>;

    /// Classifies the entry at `path`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing exists at the path and
    /// `PermissionDenied` if it cannot be inspected.
    fn metadata(&self, path: &Path) -> Result<EntryKind>;

    /// Classifies the entry at `path` without following symlinks.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing exists at the path.
    fn entry_kind(&self, path: &Path) -> Result<EntryKind>;

    /// Lists the names of the immediate entries of a directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the path is missing and `NotADirectory` if it
    /// is not a directory.
    fn list_dir(&self, path: &Path) -> Result<Vec<String>>;
}
