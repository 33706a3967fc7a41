//! `base-path`, `file-ext` and `join-path` commands.

use super::line;
use crate::toolkit::Toolkit;

/// Execute `base-path`.
#[must_use]
pub fn base_path(nuv: &Toolkit<'_>, path: &str) -> String {
    line(nuv.base_path(path))
}

/// Execute `file-ext`. An empty extension prints an empty line.
#[must_use]
pub fn file_ext(nuv: &Toolkit<'_>, path: &str) -> String {
    let mut ext = nuv.file_ext(path);
    ext.push('\n');
    ext
}

/// Execute `join-path`.
#[must_use]
pub fn join_path(nuv: &Toolkit<'_>, left: &str, right: &str) -> String {
    line(nuv.join_path(left, right))
}
