//! Recording adapter for the `FileSystem` port.

use std::path::Path;

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::error::Result;
use crate::ports::{EntryKind, FileSystem};

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: SharedRecorder,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }

    fn path_input(path: &Path) -> PathInput {
        PathInput { path: path.display().to_string() }
    }
}

#[derive(Serialize)]
struct PathInput {
    path: String,
}

#[derive(Serialize)]
struct WriteInput<'a> {
    path: String,
    contents: &'a str,
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let result = self.inner.read_to_string(path);
        record_result(&self.recorder, "fs", "read_to_string", &Self::path_input(path), &result);
        result
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let result = self.inner.write(path, contents);
        let input = WriteInput { path: path.display().to_string(), contents };
        record_result(&self.recorder, "fs", "write", &input, &result);
        result
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        let result = self.inner.exists(path);
        record_result(&self.recorder, "fs", "exists", &Self::path_input(path), &result);
        result
    }

    fn is_dir(&self, path: &Path) -> Result<bool> {
        let result = self.inner.is_dir(path);
        record_result(&self.recorder, "fs", "is_dir", &Self::path_input(path), &result);
        result
    }

    fn metadata(&self, path: &Path) -> Result<EntryKind> {
        let result = self.inner.metadata(path);
        record_result(&self.recorder, "fs", "metadata", &Self::path_input(path), &result);
        result
    }

    fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let result = self.inner.entry_kind(path);
        record_result(&self.recorder, "fs", "entry_kind", &Self::path_input(path), &result);
        result
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let result = self.inner.list_dir(path);
        record_result(&self.recorder, "fs", "list_dir", &Self::path_input(path), &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::live::LiveFileSystem;
    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;

    #[test]
    fn records_calls_and_errors() {
        let dir = tempfile::tempdir().unwrap();
        let cassette_path = dir.path().join("fs.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test", "abc")));

        {
            let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder));
            assert!(fs.exists(dir.path()).unwrap());
            assert!(fs.read_to_string(&dir.path().join("missing.txt")).is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette =
            Cassette::from_yaml(&std::fs::read_to_string(&cassette_path).unwrap()).unwrap();
        let methods: Vec<&str> =
            cassette.interactions.iter().map(|i| i.method.as_str()).collect();
        assert_eq!(methods, vec!["exists", "read_to_string"]);
        assert_eq!(cassette.interactions[0].output["ok"], true);
        assert_eq!(cassette.interactions[1].output["err"]["kind"], "not_found");
    }
}
