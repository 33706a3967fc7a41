//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::replay;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::Result;
use crate::ports::filesystem::{EntryKind, FileSystem};

/// Replays recorded filesystem operations from a cassette.
///
/// Paths are not matched against the recording; calls are answered in the
/// order they were recorded.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String> {
        replay(&self.replayer, "fs", "read_to_string")
    }

    fn write(&self, _path: &Path, _contents: &str) -> Result<()> {
        replay(&self.replayer, "fs", "write")
    }

    fn exists(&self, _path: &Path) -> Result<bool> {
        replay(&self.replayer, "fs", "exists")
    }

    fn is_dir(&self, _path: &Path) -> Result<bool> {
        replay(&self.replayer, "fs", "is_dir")
    }

    fn metadata(&self, _path: &Path) -> Result<EntryKind> {
        replay(&self.replayer, "fs", "metadata")
    }

    fn entry_kind(&self, _path: &Path) -> Result<EntryKind> {
        replay(&self.replayer, "fs", "entry_kind")
    }

    fn list_dir(&self, _path: &Path) -> Result<Vec<String>> {
        replay(&self.replayer, "fs", "list_dir")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::error::{Error, ErrorKind};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    fn fs_call(seq: u64, method: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq,
            port: "fs".into(),
            method: method.into(),
            input: json!({"path": "testdata"}),
            output,
        }
    }

    #[test]
    fn replays_reads_and_listings() {
        let fs = ReplayingFileSystem::new(make_replayer(vec![
            fs_call(0, "read_to_string", json!({"ok": "a sample text file"})),
            fs_call(1, "list_dir", json!({"ok": ["sample.txt", "subfolder"]})),
            fs_call(2, "entry_kind", json!({"ok": "directory"})),
            fs_call(3, "write", json!({"ok": null})),
        ]));

        assert_eq!(fs.read_to_string(Path::new("x")).unwrap(), "a sample text file");
        assert_eq!(fs.list_dir(Path::new("x")).unwrap(), vec!["sample.txt", "subfolder"]);
        assert_eq!(fs.entry_kind(Path::new("x")).unwrap(), EntryKind::Directory);
        assert!(fs.write(Path::new("x"), "y").is_ok());
    }

    #[test]
    fn replays_typed_errors() {
        let fs = ReplayingFileSystem::new(make_replayer(vec![fs_call(
            0,
            "list_dir",
            json!({"err": {"kind": "permission_denied", "message": "permission denied: locked"}}),
        )]));

        let err = fs.list_dir(Path::new("locked")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(err.to_string(), "permission denied: locked");
    }

    #[test]
    fn replays_flags() {
        let fs = ReplayingFileSystem::new(make_replayer(vec![
            fs_call(0, "exists", json!({"ok": true})),
            fs_call(1, "is_dir", json!(false)),
        ]));
        assert!(fs.exists(Path::new("a")).unwrap());
        assert!(!fs.is_dir(Path::new("a")).unwrap());
    }

    #[test]
    fn unanswered_calls_are_errors() {
        let fs = ReplayingFileSystem::new(make_replayer(vec![fs_call(
            0,
            "read_to_string",
            json!({"ok": "only once"}),
        )]));
        assert_eq!(fs.read_to_string(Path::new("a")).unwrap(), "only once");

        for err in [
            fs.read_to_string(Path::new("a")).unwrap_err(),
            fs.exists(Path::new("a")).unwrap_err(),
            fs.metadata(Path::new("a")).unwrap_err(),
        ] {
            assert!(matches!(err, Error::Cassette(_)), "got {err:?}");
            assert!(err.to_string().contains("cassette exhausted"), "{err}");
        }
    }
}
