//! Runtime settings read from the environment.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable naming a directory to record cassettes into.
pub const RECORD_VAR: &str = "NUV_RECORD";
/// Environment variable naming a cassette directory or file to replay.
pub const REPLAY_VAR: &str = "NUV_REPLAY";
/// Environment variable holding a `tracing` filter directive.
pub const LOG_VAR: &str = "NUV_LOG";

/// Which adapters back the service context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Real disk and processes.
    #[default]
    Live,
    /// Real disk and processes, recorded into the directory.
    Record(PathBuf),
    /// Answers from cassettes: a session directory or a single cassette file.
    Replay(PathBuf),
}

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Adapter mode.
    pub mode: Mode,
    /// Log filter directive, if set.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Loads `.env` from the working directory (if any) and reads the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `.env` exists but cannot be read or parsed, or
    /// if both recording and replay are requested.
    pub fn from_env() -> Result<Self> {
        check_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if both recording and replay are requested.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mode = match (get(RECORD_VAR), get(REPLAY_VAR)) {
            (Some(_), Some(_)) => {
                return Err(Error::Config(format!(
                    "{RECORD_VAR} and {REPLAY_VAR} cannot be set together"
                )))
            }
            (Some(dir), None) => Mode::Record(PathBuf::from(dir)),
            (None, Some(path)) => Mode::Replay(PathBuf::from(path)),
            (None, None) => Mode::Live,
        };
        Ok(Self { mode, log_filter: get(LOG_VAR) })
    }
}

/// Accepts a loaded or absent `.env` file and rejects a broken one.
fn check_dotenv(loaded: std::result::Result<PathBuf, dotenvy::Error>) -> Result<()> {
    match loaded {
        Ok(path) => {
            debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(Error::Config(format!(".env: {err}"))),
    }
}
