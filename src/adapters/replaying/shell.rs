//! Replaying adapter for the `ShellExecutor` port.

use std::sync::Mutex;

use super::replay;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::Result;
use crate::ports::shell::{CommandOutput, ShellExecutor};

/// Replays recorded program runs from a cassette.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, _program: &str, _args: &[String]) -> Result<CommandOutput> {
        replay(&self.replayer, "shell", "run")
    }
}
