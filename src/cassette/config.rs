//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;
use crate::error::{Error, Result};

/// File name of the cassette for `port` inside a session directory.
#[must_use]
pub fn port_file_name(port: &str) -> String {
    format!("{port}.cassette.yaml")
}

/// Per-port cassette file paths. Ports without a cassette path fail every
/// call during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the filesystem port cassette file.
    pub fs: Option<PathBuf>,
    /// Path to the shell port cassette file.
    pub shell: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
#[derive(Debug)]
pub struct PortReplayers {
    /// Replayer for the filesystem port.
    pub fs: Option<CassetteReplayer>,
    /// Replayer for the shell port.
    pub shell: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Picks up `fs.cassette.yaml` and `shell.cassette.yaml` from a session
    /// directory written by a recording session. Missing files stay `None`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `NotADirectory` if `dir` is not a directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            return Err(Error::NotFound { path: dir.to_path_buf() });
        }
        if !dir.is_dir() {
            return Err(Error::NotADirectory { path: dir.to_path_buf() });
        }
        let pick = |port: &str| Some(dir.join(port_file_name(port))).filter(|p| p.is_file());
        Ok(Self { fs: pick("fs"), shell: pick("shell") })
    }

    /// Load one cassette file and create a replayer over all its interactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<CassetteReplayer> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        let cassette = Cassette::from_yaml(&content)
            .map_err(|e| Error::Cassette(format!("{}: {e}", path.display())))?;
        Ok(CassetteReplayer::new(&cassette))
    }

    /// Load all configured per-port cassette files.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers> {
        Ok(PortReplayers {
            fs: self.fs.as_deref().map(Self::load).transpose()?,
            shell: self.shell.as_deref().map(Self::load).transpose()?,
        })
    }
}
