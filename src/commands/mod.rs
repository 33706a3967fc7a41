//! Command dispatch and handlers.
//!
//! Handlers return the text to print so they can be tested without
//! capturing stdout.

pub mod exec;
pub mod files;
pub mod paths;
pub mod scan;
pub mod yaml;

use std::io::Write;

use tracing::info;

use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;
use crate::error::Result;
use crate::settings::{Mode, Settings};
use crate::toolkit::Toolkit;

/// Dispatch a parsed command to its handler and print its output.
///
/// With [`Mode::Record`] every port interaction is written to per-port
/// cassette files once the command finishes, even when it fails.
///
/// # Errors
///
/// Returns a printable message if context setup, the handler, or
/// finishing a recording fails.
pub fn dispatch(command: &Command, settings: &Settings) -> std::result::Result<(), String> {
    let (ctx, session) = build_context(&settings.mode).map_err(render)?;

    let result = execute(command, &Toolkit::new(&ctx));

    if let Some(session) = session {
        // Adapters hold the recorders; release them before finishing.
        drop(ctx);
        let dir = session.finish().map_err(render)?;
        info!(dir = %dir.display(), "recording saved");
    }

    let output = result.map_err(render)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| format!("error: failed to write output: {e}"))
}

/// Run a command against the given toolkit and return its output.
///
/// # Errors
///
/// Returns the handler's error.
pub fn execute(command: &Command, nuv: &Toolkit<'_>) -> Result<String> {
    match command {
        Command::ReadFile { path } => files::read_file(nuv, path),
        Command::WriteFile { path, text } => files::write_file(nuv, path, text),
        Command::ReadDir { path } => files::read_dir(nuv, path),
        Command::Exists { path } => files::exists(nuv, path),
        Command::IsDir { path } => files::is_dir(nuv, path),
        Command::Scan { root, template } => scan::run(nuv, root, template),
        Command::ToYaml { json } => yaml::to_yaml(nuv, json),
        Command::FromYaml { path } => yaml::from_yaml(nuv, path),
        Command::BasePath { path } => Ok(paths::base_path(nuv, path)),
        Command::FileExt { path } => Ok(paths::file_ext(nuv, path)),
        Command::JoinPath { left, right } => Ok(paths::join_path(nuv, left, right)),
        Command::Exec { program, args } => exec::run(nuv, program, args),
    }
}

fn build_context(mode: &Mode) -> Result<(ServiceContext, Option<RecordingSession>)> {
    match mode {
        Mode::Live => Ok((ServiceContext::live(), None)),
        Mode::Record(dir) => {
            let (ctx, session) = ServiceContext::recording_at(dir)?;
            Ok((ctx, Some(session)))
        }
        Mode::Replay(path) if path.is_dir() => {
            let config = CassetteConfig::from_dir(path)?;
            Ok((ServiceContext::replaying_from(&config)?, None))
        }
        Mode::Replay(path) => Ok((ServiceContext::replaying(path)?, None)),
    }
}

fn render(err: crate::Error) -> String {
    format!("error: {err}")
}

/// Appends a trailing newline unless the text is empty or already has one.
pub(crate) fn line(mut text: String) -> String {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
