//! Adapter implementations for port traits.
//!
//! - `live`: real disk and process access.
//! - `recording`: wraps another adapter and records every call to a cassette.
//! - `replaying`: answers calls from a recorded cassette.

pub mod live;
pub mod recording;
pub mod replaying;
