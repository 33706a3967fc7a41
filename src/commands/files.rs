//! `read-file`, `write-file`, `read-dir`, `exists` and `is-dir`.

use std::path::Path;

use super::line;
use crate::error::Result;
use crate::toolkit::Toolkit;

/// Execute `read-file`: the contents, verbatim.
///
/// # Errors
///
/// Returns the read error.
pub fn read_file(nuv: &Toolkit<'_>, path: &Path) -> Result<String> {
    nuv.read_file(path)
}

/// Execute `write-file`: prints nothing on success.
///
/// # Errors
///
/// Returns the write error.
pub fn write_file(nuv: &Toolkit<'_>, path: &Path, text: &str) -> Result<String> {
    nuv.write_file(path, text)?;
    Ok(String::new())
}

/// Execute `read-dir`: one name per line.
///
/// # Errors
///
/// Returns the listing error.
pub fn read_dir(nuv: &Toolkit<'_>, path: &Path) -> Result<String> {
    Ok(line(nuv.read_dir(path)?.join("\n")))
}

/// Execute `exists`.
///
/// # Errors
///
/// Only a replayed context can fail here.
pub fn exists(nuv: &Toolkit<'_>, path: &Path) -> Result<String> {
    Ok(line(nuv.exists(path)?.to_string()))
}

/// Execute `is-dir`.
///
/// # Errors
///
/// Only a replayed context can fail here.
pub fn is_dir(nuv: &Toolkit<'_>, path: &Path) -> Result<String> {
    Ok(line(nuv.is_dir(path)?.to_string()))
}
