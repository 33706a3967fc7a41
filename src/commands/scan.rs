//! `nuv scan` command.

use std::path::Path;

use crate::error::Result;
use crate::toolkit::Toolkit;

/// Placeholder replaced by the folder path in scan templates.
pub const PLACEHOLDER: &str = "{}";

/// Execute `scan`, rendering `template` for every folder.
///
/// # Errors
///
/// Returns the scan error; nothing is printed for a failed scan.
pub fn run(nuv: &Toolkit<'_>, root: &Path, template: &str) -> Result<String> {
    nuv.scan(root, |folder| render(template, folder))
}

fn render(template: &str, folder: &Path) -> String {
    template.replace(PLACEHOLDER, &folder.display().to_string())
}
