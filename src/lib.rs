//! File, directory, YAML and process utilities behind swappable ports.
//!
//! The [`Toolkit`] exposes the operations; a [`ServiceContext`] decides
//! whether they hit the real disk, record what they do, or replay a
//! recording. [`scan`](Toolkit::scan) walks a directory tree in sorted
//! pre-order and concatenates a visitor's output per folder.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod context;
pub mod error;
pub mod logging;
pub mod paths;
pub mod ports;
pub mod scan;
pub mod settings;
pub mod toolkit;

pub use codec::Document;
pub use context::ServiceContext;
pub use error::{Error, ErrorKind, Result};
pub use toolkit::Toolkit;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use crate::settings::Settings;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns a printable message when argument parsing, settings, or the
/// command itself fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err)
            if matches!(err.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) =>
        {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string().trim_end().to_string()),
    };
    let settings = Settings::from_env().map_err(|e| format!("error: {e}"))?;
    logging::init(settings.log_filter.as_deref());
    commands::dispatch(&cli.command, &settings)
}
