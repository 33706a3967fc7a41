//! Live command runner using `std::process::Command`.

use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::shell::{CommandOutput, ShellExecutor};

/// Live executor that spawns programs directly.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        debug!(program, ?args, "spawning");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| Error::Exec { program: program.to_string(), source })?;
        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
