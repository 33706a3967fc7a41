//! Command runner port for executing external programs.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The output of a finished program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Exit code of the process, `-1` when killed by a signal.
    pub exit_code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Standard output followed by standard error.
    #[must_use]
    pub fn combined(&self) -> String {
        let mut out = String::with_capacity(self.stdout.len() + self.stderr.len());
        out.push_str(&self.stdout);
        out.push_str(&self.stderr);
        out
    }
}

/// Runs external programs.
///
/// Abstracting execution allows deterministic replay by recording and
/// replaying program outputs during cassette playback.
pub trait ShellExecutor: Send + Sync {
    /// Spawns `program` with `args` (no shell involved) and waits for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exec`](crate::Error::Exec) if the program cannot be
    /// spawned.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}
