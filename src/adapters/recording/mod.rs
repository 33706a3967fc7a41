//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;
pub mod shell;

pub use filesystem::RecordingFileSystem;
pub use shell::RecordingShellExecutor;

use std::sync::PoisonError;

use serde::Serialize;
use serde_json::Value;
use crate::cassette::format::encode_result;
use crate::cassette::session::SharedRecorder;
use crate::error::Result;

/// Record a `Result` interaction using the `ok`/`err` convention of
/// [`encode_result`].
pub(crate) fn record_result<T, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T>,
) where
    T: Serialize,
    I: Serialize,
{
    push(recorder, port, method, input, encode_result(result));
}

fn push<I: Serialize>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: Value,
) {
    let input = serde_json::to_value(input).unwrap_or(Value::Null);
    recorder.lock().unwrap_or_else(PoisonError::into_inner).record(port, method, input, output);
}
