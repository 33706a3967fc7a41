//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `nuv`.
#[derive(Debug, Parser)]
#[command(name = "nuv", version, about = "File, directory and YAML utilities")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the contents of a file.
    ReadFile {
        /// File to read.
        path: PathBuf,
    },
    /// Create or overwrite a file with the given text.
    WriteFile {
        /// File to write.
        path: PathBuf,
        /// Text to write.
        text: String,
    },
    /// List the entries of a directory, one per line.
    ReadDir {
        /// Directory to list.
        path: PathBuf,
    },
    /// Render a template for every folder under ROOT, in sorted pre-order.
    Scan {
        /// Root directory of the walk.
        root: PathBuf,
        /// Output per folder; `{}` is replaced by the folder path.
        #[arg(long, short, default_value = "{}\n")]
        template: String,
    },
    /// Convert a JSON object to YAML.
    ToYaml {
        /// JSON object text.
        json: String,
    },
    /// Read a YAML file and print it as JSON.
    FromYaml {
        /// YAML file to read.
        path: PathBuf,
    },
    /// Print whether a path exists.
    Exists {
        /// Path to check.
        path: PathBuf,
    },
    /// Print whether a path is a directory.
    IsDir {
        /// Path to check.
        path: PathBuf,
    },
    /// Print the last element of a path.
    BasePath {
        /// Path string.
        path: String,
    },
    /// Print the extension of a path, with its dot.
    FileExt {
        /// Path string.
        path: String,
    },
    /// Join two path fragments.
    JoinPath {
        /// Leading fragment.
        left: String,
        /// Trailing fragment.
        right: String,
    },
    /// Run a program and print its combined output.
    Exec {
        /// Program to run.
        program: String,
        /// Arguments passed to the program.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
