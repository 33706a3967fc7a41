//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{LiveFileSystem, LiveShellExecutor};
use crate::adapters::recording::{RecordingFileSystem, RecordingShellExecutor};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingShellExecutor};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::error::{Error, Result};
use crate::ports::filesystem::{EntryKind, FileSystem};
use crate::ports::shell::{CommandOutput, ShellExecutor};

/// Bundles the port trait objects the toolkit works through.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Filesystem for file and directory I/O.
    pub fs: Box<dyn FileSystem>,
    /// Executor for external programs.
    pub shell: Box<dyn ShellExecutor>,
}

impl ServiceContext {
    /// Creates a context backed by the real disk and process table.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), shell: Box::new(LiveShellExecutor) }
    }

    /// Creates a live context that records every port call into `dir`.
    ///
    /// The returned session must be finished after the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the recording session cannot be started.
    pub fn recording_at(dir: &Path) -> Result<(Self, RecordingSession)> {
        let session = RecordingSession::at(dir)?;
        let ctx = Self {
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.fs),
            )),
            shell: Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                Arc::clone(&session.shell),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a single cassette file holding
    /// interactions for any port.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        let cassette = Cassette::from_yaml(&content)?;

        // Each port gets its own replayer so cursors stay independent.
        Ok(Self {
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a cassette use an adapter that fails every call with
    /// [`Error::Cassette`].
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self> {
        let replayers = config.load_all()?;

        Ok(Self {
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(UnconfiguredFileSystem),
            },
            shell: match replayers.shell {
                Some(r) => Box::new(ReplayingShellExecutor::new(r)),
                None => Box::new(UnconfiguredShellExecutor),
            },
        })
    }
}

// --- Adapters for ports without a cassette ---

fn unconfigured(port: &str) -> Error {
    Error::Cassette(format!("{port} port not configured: no cassette loaded for {port}"))
}

struct UnconfiguredFileSystem;
impl FileSystem for UnconfiguredFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String> {
        Err(unconfigured("fs"))
    }
    fn write(&self, _path: &Path, _contents: &str) -> Result<()> {
        Err(unconfigured("fs"))
    }
    fn exists(&self, _path: &Path) -> Result<bool> {
        Err(unconfigured("fs"))
    }
    fn is_dir(&self, _path: &Path) -> Result<bool> {
        Err(unconfigured("fs"))
    }
    fn metadata(&self, _path: &Path) -> Result<EntryKind> {
        Err(unconfigured("fs"))
    }
    fn entry_kind(&self, _path: &Path) -> Result<EntryKind> {
        Err(unconfigured("fs"))
    }
    fn list_dir(&self, _path: &Path) -> Result<Vec<String>> {
        Err(unconfigured("fs"))
    }
}

struct UnconfiguredShellExecutor;
impl ShellExecutor for UnconfiguredShellExecutor {
    fn run(&self, _program: &str, _args: &[String]) -> Result<CommandOutput> {
        Err(unconfigured("shell"))
    }
}
