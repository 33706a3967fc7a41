//! Replaying adapters that serve recorded interactions.

pub mod filesystem;
pub mod shell;

pub use filesystem::ReplayingFileSystem;
pub use shell::ReplayingShellExecutor;

use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;

use crate::cassette::format::decode_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::Result;

/// Pops the next recorded output for `port::method` and decodes it.
///
/// A missing interaction and a recorded failure both come back as `Err`.
pub(crate) fn replay<T: DeserializeOwned>(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Result<T> {
    let interaction = replayer
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .try_next_interaction(port, method)?;
    decode_result(&interaction.output, &format!("{port}::{method}"))
}
