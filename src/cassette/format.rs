//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Error, ErrorKind, Result};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (`"fs"` or `"shell"`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: Value,
    /// Output data returned from the port.
    pub output: Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit hash at recording time.
    pub commit: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if the text is not a valid cassette.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::Cassette(format!("invalid cassette: {e}")))
    }
}

/// Recorded form of a failed port call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorRecord {
    /// Error classification.
    pub kind: ErrorKind,
    /// Display message of the original error.
    pub message: String,
}

/// Encodes a port result as `{"ok": value}` or `{"err": {kind, message}}`.
#[must_use]
pub fn encode_result<T: Serialize>(result: &Result<T>) -> Value {
    match result {
        Ok(v) => json!({ "ok": serde_json::to_value(v).unwrap_or(Value::Null) }),
        Err(e) => {
            let record = ErrorRecord { kind: e.kind(), message: e.to_string() };
            json!({ "err": record })
        }
    }
}

/// Decodes a value written by [`encode_result`].
///
/// A bare string under `err` is accepted and replays as [`ErrorKind::Other`].
///
/// # Errors
///
/// Returns the recorded error, or [`Error::Cassette`] when the output does
/// not deserialize into `T`.
pub fn decode_result<T: DeserializeOwned>(output: &Value, context: &str) -> Result<T> {
    if let Some(err) = output.get("err") {
        let record = match err {
            Value::String(message) => {
                ErrorRecord { kind: ErrorKind::Other, message: message.clone() }
            }
            other => serde_json::from_value(other.clone())
                .map_err(|e| Error::Cassette(format!("{context}: malformed error record: {e}")))?,
        };
        return Err(Error::Replayed { kind: record.kind, message: record.message });
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| Error::Cassette(format!("{context}: failed to deserialize: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_cassette() -> Cassette {
        Cassette {
            name: "test-cassette".into(),
            recorded_at: Utc::now(),
            commit: "abc123".into(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "fs".into(),
                    method: "list_dir".into(),
                    input: json!({"path": "testdata"}),
                    output: json!({"ok": ["sample.txt", "subfolder"]}),
                },
                Interaction {
                    seq: 1,
                    port: "shell".into(),
                    method: "run".into(),
                    input: json!({"program": "echo", "args": ["hi"]}),
                    output: json!({"ok": {"exit_code": 0, "stdout": "hi\n", "stderr": ""}}),
                },
            ],
        }
    }

    #[test]
    fn yaml_round_trip() {
        let cassette = sample_cassette();
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let deserialized = Cassette::from_yaml(&yaml).expect("deserialize");
        assert_eq!(cassette, deserialized);
    }

    #[test]
    fn errors_keep_their_kind() {
        let result: Result<String> =
            Err(Error::NotFound { path: PathBuf::from("testdata/missing.txt") });
        let encoded = encode_result(&result);
        assert_eq!(encoded["err"]["kind"], json!("not_found"));

        let err = decode_result::<String>(&encoded, "fs::read_to_string").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "not found: testdata/missing.txt");
    }

    #[test]
    fn bare_string_error_replays_as_other() {
        let err = decode_result::<String>(&json!({"err": "boom"}), "ctx").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn mismatched_output_is_cassette_error() {
        let err = decode_result::<Vec<String>>(&json!({"ok": 5}), "fs::list_dir").unwrap_err();
        assert!(matches!(err, Error::Cassette(_)));
    }
}
