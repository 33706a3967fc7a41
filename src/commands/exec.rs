//! `nuv exec` command.

use crate::error::Result;
use crate::toolkit::Toolkit;

/// Execute `exec`: the program's stdout then stderr, as produced.
///
/// # Errors
///
/// Returns `Exec` if the program cannot be started.
pub fn run(nuv: &Toolkit<'_>, program: &str, args: &[String]) -> Result<String> {
    nuv.exec(program, args)
}
