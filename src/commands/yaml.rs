//! `to-yaml` and `from-yaml` commands.

use std::path::Path;

use crate::codec;
use crate::error::{Error, Result};
use crate::toolkit::Toolkit;

/// Execute `to-yaml`: parse a JSON object and print it as YAML.
///
/// # Errors
///
/// Returns `Parse` or `NotAMapping` for bad input.
pub fn to_yaml(nuv: &Toolkit<'_>, json: &str) -> Result<String> {
    nuv.to_yaml(&codec::from_json(json)?)
}

/// Execute `from-yaml`: read a YAML file and print it as pretty JSON.
///
/// # Errors
///
/// Returns the read error or the decode error.
pub fn from_yaml(nuv: &Toolkit<'_>, path: &Path) -> Result<String> {
    let document = nuv.from_yaml(&nuv.read_file(path)?)?;
    let mut json = serde_json::to_string_pretty(&document)
        .map_err(|e| Error::Parse { reason: e.to_string() })?;
    json.push('\n');
    Ok(json)
}
