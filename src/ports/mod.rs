//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the toolkit and an external
//! system (the filesystem, spawned programs). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod shell;

pub use filesystem::{EntryKind, FileSystem};
pub use shell::{CommandOutput, ShellExecutor};
