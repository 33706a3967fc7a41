//! Live filesystem adapter using `std::fs`.

use std::io;
use std::path::Path;

use tracing::trace;

use crate::error::{Error, Result};
use crate::ports::filesystem::{EntryKind, FileSystem};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        trace!(path = %path.display(), "read_to_string");
        std::fs::read_to_string(path).map_err(|err| match err.kind() {
            // Only regular files can be read; a directory reads as absent.
            io::ErrorKind::IsADirectory => Error::NotFound { path: path.to_path_buf() },
            _ => Error::from_io(path, err),
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        trace!(path = %path.display(), bytes = contents.len(), "write");
        std::fs::write(path, contents).map_err(|err| Error::from_io(path, err))
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(!matches!(std::fs::metadata(path), Err(err) if err.kind() == io::ErrorKind::NotFound))
    }

    fn is_dir(&self, path: &Path) -> Result<bool> {
        Ok(path.is_dir())
    }

    fn metadata(&self, path: &Path) -> Result<EntryKind> {
        let metadata = std::fs::metadata(path).map_err(|err| Error::from_io(path, err))?;
        Ok(classify(metadata.file_type()))
    }

    fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let metadata = std::fs::symlink_metadata(path).map_err(|err| Error::from_io(path, err))?;
        Ok(classify(metadata.file_type()))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        trace!(path = %path.display(), "list_dir");
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|err| Error::from_io(path, err))? {
            let entry = entry.map_err(|err| Error::from_io(path, err))?;
            entries.push(entry.file_name().to_string_lossy().into_owned());
        }
        entries.sort();
        Ok(entries)
    }
}

fn classify(file_type: std::fs::FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
