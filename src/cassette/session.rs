//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tracing::warn;

use super::config::port_file_name;
use super::recorder::CassetteRecorder;
use crate::error::{Error, Result};

/// Recorder shared between a session and the adapter writing into it.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Owns one `CassetteRecorder` per port for a recording session.
///
/// Each port writes to `<dir>/<port>.cassette.yaml`.
#[derive(Debug)]
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: SharedRecorder,
    /// Recorder for shell interactions.
    pub shell: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Starts a session writing into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or already holds
    /// cassettes from another session.
    pub fn at(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir).map_err(|e| Error::from_io(dir, e))?;
        for port in ["fs", "shell"] {
            let existing = dir.join(port_file_name(port));
            if existing.exists() {
                return Err(Error::Cassette(format!(
                    "refusing to overwrite {}",
                    existing.display()
                )));
            }
        }

        let name = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let commit = commit_hash();
        let make_recorder = |port: &str| -> SharedRecorder {
            let path = dir.join(port_file_name(port));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{name}-{port}"), &commit)))
        };

        Ok(Self { fs: make_recorder("fs"), shell: make_recorder("shell"), output_dir: dir.into() })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every port's cassette file and returns the output directory.
    ///
    /// Adapters holding the recorders must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf> {
        fn finish_one(shared: SharedRecorder, port: &str) -> Result<()> {
            let recorder = Arc::try_unwrap(shared)
                .map_err(|_| Error::Cassette(format!("recorder for {port} still in use")))?
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner);
            recorder.finish()?;
            Ok(())
        }

        finish_one(self.fs, "fs")?;
        finish_one(self.shell, "shell")?;
        Ok(self.output_dir)
    }
}

/// Current git commit hash, or `"unknown"` outside a repository.
fn commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    hash.unwrap_or_else(|| {
        warn!("could not read git commit hash, recording as 'unknown'");
        "unknown".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use serde_json::json;

    #[test]
    fn session_writes_one_cassette_per_port() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("session");

        let session = RecordingSession::at(&out).unwrap();
        session.fs.lock().unwrap().record("fs", "exists", json!({"path": "x"}), json!(false));
        let written = session.finish().unwrap();
        assert_eq!(written, out);

        let fs_yaml = std::fs::read_to_string(out.join("fs.cassette.yaml")).unwrap();
        let cassette = Cassette::from_yaml(&fs_yaml).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert!(out.join("shell.cassette.yaml").is_file());
    }

    #[test]
    fn refuses_to_overwrite_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        RecordingSession::at(dir.path()).unwrap().finish().unwrap();

        let err = RecordingSession::at(dir.path()).unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite"));
    }

    #[test]
    fn finish_fails_while_recorder_is_shared() {
        let dir = tempfile::tempdir().unwrap();
        let session = RecordingSession::at(dir.path()).unwrap();
        let _held = Arc::clone(&session.fs);
        assert!(session.finish().is_err());
    }

    #[test]
    fn commit_hash_is_never_empty() {
        assert!(!commit_hash().is_empty());
    }
}
