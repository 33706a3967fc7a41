//! The operations exposed to callers, bound to a [`ServiceContext`].

use std::path::Path;

use tracing::{debug, info};

use crate::codec::{self, Document};
use crate::context::ServiceContext;
use crate::error::Result;
use crate::paths;
use crate::scan;

/// File, directory, YAML and process utilities.
///
/// Holds no state of its own; every call goes through the ports of the
/// borrowed context, so the same code runs live, recorded or replayed.
pub struct Toolkit<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> Toolkit<'a> {
    /// Binds a toolkit to a service context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reads a whole file as text.
    ///
    /// # Errors
    ///
    /// `NotFound` if the path is missing or not a regular file,
    /// `PermissionDenied` if it cannot be opened.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        self.ctx.fs.read_to_string(path.as_ref())
    }

    /// Creates or overwrites a file with `text`.
    ///
    /// # Errors
    ///
    /// `NotFound` if the parent directory is missing, `PermissionDenied` if
    /// the write is refused.
    pub fn write_file(&self, path: impl AsRef<Path>, text: &str) -> Result<()> {
        let path = path.as_ref();
        self.ctx.fs.write(path, text)?;
        info!(path = %path.display(), bytes = text.len(), "file written");
        Ok(())
    }

    /// Lists the entry names of a directory, sorted.
    ///
    /// # Errors
    ///
    /// `NotFound` if the path is missing, `NotADirectory` if it is a file.
    pub fn read_dir(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        self.ctx.fs.list_dir(path.as_ref())
    }

    /// Walks every folder under `root` in sorted pre-order and concatenates
    /// what `visit` returns for each.
    ///
    /// # Errors
    ///
    /// See [`scan::scan`].
    pub fn scan<F>(&self, root: impl AsRef<Path>, visit: F) -> Result<String>
    where
        F: FnMut(&Path) -> String,
    {
        scan::scan(&*self.ctx.fs, root.as_ref(), visit)
    }

    /// Serializes a document as YAML.
    ///
    /// # Errors
    ///
    /// See [`codec::to_yaml`].
    pub fn to_yaml(&self, document: &Document) -> Result<String> {
        codec::to_yaml(document)
    }

    /// Parses YAML text into a document.
    ///
    /// # Errors
    ///
    /// See [`codec::from_yaml`].
    pub fn from_yaml(&self, text: &str) -> Result<Document> {
        codec::from_yaml(text)
    }

    /// Returns `true` unless `path` is known not to exist.
    ///
    /// # Errors
    ///
    /// Never on a live context; a replayed one fails when the cassette has
    /// no answer.
    pub fn exists(&self, path: impl AsRef<Path>) -> Result<bool> {
        self.ctx.fs.exists(path.as_ref())
    }

    /// Returns `true` if `path` is a directory, following symlinks.
    ///
    /// # Errors
    ///
    /// As for [`exists`](Self::exists).
    pub fn is_dir(&self, path: impl AsRef<Path>) -> Result<bool> {
        self.ctx.fs.is_dir(path.as_ref())
    }

    /// See [`paths::base_path`].
    #[must_use]
    pub fn base_path(&self, path: &str) -> String {
        paths::base_path(path)
    }

    /// See [`paths::file_ext`].
    #[must_use]
    pub fn file_ext(&self, path: &str) -> String {
        paths::file_ext(path)
    }

    /// See [`paths::join_path`].
    #[must_use]
    pub fn join_path(&self, left: &str, right: &str) -> String {
        paths::join_path(left, right)
    }

    /// Runs `program` with `args` and returns stdout followed by stderr.
    ///
    /// A non-zero exit status is not an error; the output is returned as is.
    ///
    /// # Errors
    ///
    /// `Exec` if the program cannot be started.
    pub fn exec(&self, program: &str, args: &[String]) -> Result<String> {
        let output = self.ctx.shell.run(program, args)?;
        if output.exit_code != 0 {
            debug!(program, exit_code = output.exit_code, "program exited with failure");
        }
        Ok(output.combined())
    }
}
